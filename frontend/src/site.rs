//! Firm profile data the landing page is rendered from.
//!
//! Every page variant is one `FirmProfile`; the active one is picked at build
//! time with `FIRM_PROFILE`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceIcon {
    Gavel,
    Heart,
    Building,
    FileText,
    Briefcase,
    Copyright,
}

impl ServiceIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            ServiceIcon::Gavel => "⚖️",
            ServiceIcon::Heart => "❤️",
            ServiceIcon::Building => "🏛️",
            ServiceIcon::FileText => "📄",
            ServiceIcon::Briefcase => "💼",
            ServiceIcon::Copyright => "©️",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub icon: ServiceIcon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stats {
    pub years: &'static str,
    pub success_rate: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FirmProfile {
    pub key: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    /// Digits only, used for `tel:` and `wa.me` links.
    pub phone: &'static str,
    pub display_phone: &'static str,
    pub whatsapp_message: &'static str,
    pub location: &'static str,
    pub map_url: &'static str,
    pub stats: Stats,
    pub about: &'static [&'static str],
    pub services: &'static [Service],
}

pub const SERVICES: &[Service] = &[
    Service {
        icon: ServiceIcon::Gavel,
        title: "Derecho Penal",
        description: "Delitos contra la Vida, Patrimonio, Familia y Libertad.",
    },
    Service {
        icon: ServiceIcon::Heart,
        title: "Derecho Familiar",
        description: "Divorcios, Pensión Alimenticia, Custodia y Sucesiones.",
    },
    Service {
        icon: ServiceIcon::Building,
        title: "Derecho Civil",
        description: "Contratos, Daños, Desahucios y Juicios Reivindicatorios.",
    },
    Service {
        icon: ServiceIcon::FileText,
        title: "Amparo",
        description: "Protección contra actos de autoridad y detenciones.",
    },
    Service {
        icon: ServiceIcon::Briefcase,
        title: "Derecho Laboral",
        description: "Despidos, Indemnizaciones y Accidentes de Trabajo.",
    },
    Service {
        icon: ServiceIcon::Copyright,
        title: "Propiedad Industrial",
        description: "Marcas, Patentes, Derechos de Autor y Software.",
    },
];

const ABOUT: &[&str] = &[
    "Hernández y Asociados es un despacho jurídico con más de 20 años de experiencia brindando servicios legales de excelencia en Chihuahua, México. Nuestro compromiso es defender los derechos de nuestros clientes con profesionalismo, ética y dedicación.",
    "Contamos con un equipo de abogados especializados en diversas áreas del derecho, lo que nos permite ofrecer soluciones integrales y personalizadas para cada caso. Nuestra misión es proporcionar asesoría legal de la más alta calidad, manteniendo siempre la transparencia y comunicación constante con nuestros clientes.",
];

pub const HERNANDEZ_Y_ASOCIADOS: FirmProfile = FirmProfile {
    key: "hernandez",
    name: "HERNANDEZ Y ASOCIADOS",
    tagline: "Abogados de Chihuahua",
    phone: "6144681949",
    display_phone: "614-468-19-49",
    whatsapp_message: "Hola, necesito asesoría legal urgente en Chihuahua.",
    location: "Chihuahua, México",
    map_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d116545.45293214734!2d-106.1643924!3d28.6329957!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x86ea4497334757c9%3A0x67341b525d8084a4!2sChihuahua%2C%20Chih.!5e0!3m2!1ses-419!2smx!4v1700000000000!5m2!1ses-419!2smx",
    stats: Stats {
        years: "20+",
        success_rate: "90%",
    },
    about: ABOUT,
    services: SERVICES,
};

pub const ABOGADOS_DE_CHIHUAHUA: FirmProfile = FirmProfile {
    key: "chihuahua",
    name: "ABOGADOS DE CHIHUAHUA",
    tagline: "ESPECIALISTAS",
    phone: "6144681949",
    display_phone: "614-468-19-49",
    whatsapp_message: "Hola, necesito asesoría legal en Chihuahua.",
    location: "Chihuahua, México",
    map_url: "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d437.7669578384289!2d-106.07230696814854!3d28.625695900000007!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x86ea5cae8df17427%3A0xbd722b964806026!2sC.%2016a%202612%2C%20Pac%C3%ADfico%2C%20Zona%20Centro%20II%2C%2031030%20Chihuahua%2C%20Chih.!5e0!3m2!1ses-419!2smx!4v1769576894697!5m2!1ses-419!2smx",
    stats: Stats {
        years: "20+",
        success_rate: "95%",
    },
    about: ABOUT,
    services: SERVICES,
};

pub const PROFILES: &[FirmProfile] = &[HERNANDEZ_Y_ASOCIADOS, ABOGADOS_DE_CHIHUAHUA];

/// Unknown keys fall back to the first profile.
pub fn profile_named(key: &str) -> &'static FirmProfile {
    PROFILES
        .iter()
        .find(|profile| profile.key.eq_ignore_ascii_case(key.trim()))
        .unwrap_or(&PROFILES[0])
}

pub fn active_profile() -> &'static FirmProfile {
    profile_named(option_env!("FIRM_PROFILE").unwrap_or(""))
}

impl FirmProfile {
    pub fn tel_link(&self) -> String {
        format!("tel:{}", self.phone)
    }

    pub fn whatsapp_link(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.phone,
            urlencoding::encode(self.whatsapp_message)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_greeting() {
        let link = ABOGADOS_DE_CHIHUAHUA.whatsapp_link();
        assert_eq!(
            link,
            "https://wa.me/6144681949?text=Hola%2C%20necesito%20asesor%C3%ADa%20legal%20en%20Chihuahua."
        );
    }

    #[test]
    fn tel_link_uses_dial_digits() {
        assert_eq!(HERNANDEZ_Y_ASOCIADOS.tel_link(), "tel:6144681949");
    }

    #[test]
    fn profile_lookup_is_case_insensitive_with_fallback() {
        assert_eq!(profile_named("CHIHUAHUA").name, "ABOGADOS DE CHIHUAHUA");
        assert_eq!(profile_named("hernandez").name, "HERNANDEZ Y ASOCIADOS");
        assert_eq!(profile_named("").key, PROFILES[0].key);
        assert_eq!(profile_named("desconocido").key, PROFILES[0].key);
    }

    #[test]
    fn profile_keys_are_unique() {
        for (i, a) in PROFILES.iter().enumerate() {
            for b in &PROFILES[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn every_profile_lists_six_services() {
        for profile in PROFILES {
            assert_eq!(profile.services.len(), 6);
            assert!(profile.services.iter().all(|s| !s.title.is_empty()));
        }
    }
}
