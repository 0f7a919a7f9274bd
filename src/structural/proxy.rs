//! Proxy: `CachedVideoService` stands in for the slow third-party service and
//! answers repeated requests from its cache.

use std::collections::HashMap;

use tracing::debug;

pub trait VideoService {
    fn list_videos(&mut self) -> Vec<String>;
    fn video_info(&mut self, id: &str) -> String;
    fn download_video(&mut self, id: &str) -> String;
}

/// The remote service. Every call is a round trip, so it keeps count.
#[derive(Debug, Default)]
pub struct ThirdPartyVideoService {
    calls: usize,
}

impl ThirdPartyVideoService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl VideoService for ThirdPartyVideoService {
    fn list_videos(&mut self) -> Vec<String> {
        self.calls += 1;
        vec!["video1".into(), "video2".into(), "video3".into()]
    }

    fn video_info(&mut self, id: &str) -> String {
        self.calls += 1;
        format!("video[{id}]: Good video")
    }

    fn download_video(&mut self, id: &str) -> String {
        self.calls += 1;
        format!("[DOWNLOAD]{id}")
    }
}

#[derive(Debug)]
pub struct CachedVideoService<S: VideoService> {
    service: S,
    list_cache: Option<Vec<String>>,
    info_cache: HashMap<String, String>,
    /// Bypass and refill the caches on the next request.
    pub need_reset: bool,
}

impl<S: VideoService> CachedVideoService<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            list_cache: None,
            info_cache: HashMap::new(),
            need_reset: false,
        }
    }

    pub fn inner(&self) -> &S {
        &self.service
    }

    fn take_reset(&mut self) {
        if self.need_reset {
            debug!("dropping video caches");
            self.list_cache = None;
            self.info_cache.clear();
            self.need_reset = false;
        }
    }
}

impl<S: VideoService> VideoService for CachedVideoService<S> {
    fn list_videos(&mut self) -> Vec<String> {
        self.take_reset();
        let service = &mut self.service;
        self.list_cache
            .get_or_insert_with(|| service.list_videos())
            .clone()
    }

    fn video_info(&mut self, id: &str) -> String {
        self.take_reset();
        if let Some(info) = self.info_cache.get(id) {
            debug!(id, "video info cache hit");
            return info.clone();
        }
        let info = self.service.video_info(id);
        self.info_cache.insert(id.to_string(), info.clone());
        info
    }

    // Downloads are never cached.
    fn download_video(&mut self, id: &str) -> String {
        self.service.download_video(id)
    }
}

pub struct VideoManager<S: VideoService> {
    service: S,
}

impl<S: VideoService> VideoManager<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn render_video_page(&mut self, id: &str) -> String {
        self.service.video_info(id)
    }

    pub fn render_list_panel(&mut self) -> String {
        format!("[{}]", self.service.list_videos().join(", "))
    }

    pub fn react_on_user_input(&mut self) -> Vec<String> {
        vec![self.render_video_page("1321"), self.render_list_panel()]
    }
}

pub fn demo() -> Vec<String> {
    let mut manager = VideoManager::new(CachedVideoService::new(ThirdPartyVideoService::new()));
    let mut lines = manager.react_on_user_input();
    lines.extend(manager.react_on_user_input());
    lines.push(format!(
        "remote calls: {}",
        manager.service().inner().calls()
    ));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_service_answers() {
        let mut service = ThirdPartyVideoService::new();
        assert_eq!(service.list_videos(), vec!["video1", "video2", "video3"]);
        assert_eq!(service.video_info("42"), "video[42]: Good video");
        assert_eq!(service.download_video("42"), "[DOWNLOAD]42");
        assert_eq!(service.calls(), 3);
    }

    #[test]
    fn test_proxy_caches_list_and_info() {
        let mut proxy = CachedVideoService::new(ThirdPartyVideoService::new());
        for _ in 0..3 {
            proxy.list_videos();
            proxy.video_info("a");
        }
        assert_eq!(proxy.inner().calls(), 2);
    }

    #[test]
    fn test_info_cached_per_id() {
        let mut proxy = CachedVideoService::new(ThirdPartyVideoService::new());
        assert_eq!(proxy.video_info("a"), "video[a]: Good video");
        assert_eq!(proxy.video_info("b"), "video[b]: Good video");
        assert_eq!(proxy.video_info("a"), "video[a]: Good video");
        assert_eq!(proxy.inner().calls(), 2);
    }

    #[test]
    fn test_need_reset_refreshes_once() {
        let mut proxy = CachedVideoService::new(ThirdPartyVideoService::new());
        proxy.list_videos();
        proxy.need_reset = true;
        proxy.list_videos();
        proxy.list_videos();
        assert_eq!(proxy.inner().calls(), 2);
        assert!(!proxy.need_reset);
    }

    #[test]
    fn test_downloads_always_hit_service() {
        let mut proxy = CachedVideoService::new(ThirdPartyVideoService::new());
        proxy.download_video("x");
        proxy.download_video("x");
        assert_eq!(proxy.inner().calls(), 2);
    }

    #[test]
    fn test_demo() {
        assert_eq!(
            demo(),
            vec![
                "video[1321]: Good video",
                "[video1, video2, video3]",
                "video[1321]: Good video",
                "[video1, video2, video3]",
                "remote calls: 2",
            ]
        );
    }
}
