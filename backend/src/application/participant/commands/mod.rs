pub mod submit_response;
