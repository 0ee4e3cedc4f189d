/// Form-relay endpoint the contact form posts to.
pub const FORM_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[cfg(debug_assertions)]
pub fn get_form_access_key() -> &'static str {
    "dev-sandbox-key"  // relay sandbox key when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_form_access_key() -> &'static str {
    "55e49b2f-3c1d-4a8e-9b17-0d6f2c48a931"  // Production access key
}
