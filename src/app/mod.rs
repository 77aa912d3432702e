pub mod tableware_service;
