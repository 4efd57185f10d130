mod http;

pub use http::HttpModeFetcher;
