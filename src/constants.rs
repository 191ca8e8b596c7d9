/// Prefix attached to every log line emitted by the service.
pub const API_NAME: &str = "[car-sales-api]";
