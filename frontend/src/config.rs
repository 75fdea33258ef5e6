#[cfg_attr(debug_assertions, allow(dead_code))]
const DEFAULT_BACKEND_URL: &str = "https://asociados-backend.onrender.com";

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    match option_env!("API_URL") {
        Some(url) if !url.is_empty() => url,
        _ => "http://localhost:10000", // Development URL when running locally
    }
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    match option_env!("API_URL") {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_BACKEND_URL,
    }
}

pub fn contact_endpoint() -> String {
    join_endpoint(get_backend_url(), "/api/contacto")
}

fn join_endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
