use log::Level;

pub const BRAND_NAME: &str = "Vibebit";

pub const SUPPORT_WHATSAPP_NUMBER: &str = "5528999328644";
pub const SUPPORT_WHATSAPP_MESSAGE: &str =
    "Olá! Gostaria de saber mais sobre os planos de criação de sites.";

/// Price literal meaning "contact us"; cards showing it get no monthly suffix.
pub const CONTACT_PRICE: &str = "Sob consulta";
pub const MONTHLY_SUFFIX: &str = "/mês";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
