// Services talking to the outside world
pub mod api_client;
