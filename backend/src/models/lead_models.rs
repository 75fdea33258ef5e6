/// A prospective client's contact details and case summary.
///
/// Only ever built from a payload whose three fields are non-empty; it lives
/// for the duration of one request and is never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub case_description: String,
}
