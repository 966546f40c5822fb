mod common;
mod draft;
mod service;
