// Adapters layer: concrete implementations for external systems (http server, remote evaluator, API Gateway events)

pub mod evaluator;
pub mod gateway;
pub mod http;
