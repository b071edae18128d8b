/// Certificate renderer adapters
mod caching_renderer;
mod openssl_renderer;

pub use caching_renderer::CachingCertificateRenderer;
pub use openssl_renderer::{
    OpensslCertificateRenderer, DEFAULT_DECODE_TIMEOUT, DEFAULT_OPENSSL_PROGRAM,
};
