use homeowner_parser::Person;
use serde::Serialize;

#[derive(Serialize)]
pub struct ParseResponse {
    pub data: Vec<Person>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
