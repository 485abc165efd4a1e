use crate::config::proxy::ProxyRule;

pub trait ConfigProvider: Send + Sync {
    fn backend_url(&self) -> &str;
    fn proxy_rule(&self) -> Option<&ProxyRule>;
}
