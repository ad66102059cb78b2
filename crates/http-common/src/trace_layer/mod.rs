pub mod custom_make_span;
pub mod custom_on_response;

pub use custom_make_span::CustomMakeSpan;
pub use custom_on_response::CustomOnResponse;
