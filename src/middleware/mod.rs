pub mod request_logging;
