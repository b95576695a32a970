//! Configuration handling for the site

use crate::state::navigation::{BACK_TO_TOP_THRESHOLD, HEADER_SCROLL_THRESHOLD, MOBILE_BREAKPOINT};
use crate::state::{ChromeThresholds, NoticeTimings, RotationTimings, SplashTimings};
use crate::state::hero_tabs::{AUTO_ROTATE_DELAY, RESUME_AFTER_CLICK};
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where completed forms are sent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Log each submission
    #[default]
    Log,
    /// Append each submission to a JSON-lines file
    Outbox,
}

/// User configuration. Every field is optional; missing ones use defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SiteConfig {
    /// Hero tab rotation interval in milliseconds
    pub rotate_interval_ms: Option<u64>,
    /// Quiet period after a tab click before rotation resumes, in milliseconds
    pub resume_after_ms: Option<u64>,
    /// Visible time of floating notices, in milliseconds
    pub notice_ms: Option<u64>,
    /// Fade-out time of floating notices, in milliseconds
    pub notice_exit_ms: Option<u64>,
    /// Visible time of form success banners, in milliseconds
    pub banner_ms: Option<u64>,
    /// How long the startup banner holds, in milliseconds
    pub splash_ms: Option<u64>,
    /// How long the startup banner takes to scroll off, in milliseconds
    pub splash_scroll_ms: Option<u64>,
    /// Scroll offset past which the header compacts
    pub header_scroll_threshold: Option<u32>,
    /// Scroll offset past which back-to-top shows
    pub back_to_top_threshold: Option<u32>,
    /// Viewport width at or below which the menu collapses on navigation
    pub mobile_breakpoint: Option<u32>,
    /// Submission destination
    pub sink: Option<SinkKind>,
    /// Outbox file, defaults to the user data directory
    pub outbox_path: Option<PathBuf>,
}

fn millis(value: Option<u64>, default: Duration) -> Duration {
    value.map(Duration::from_millis).unwrap_or(default)
}

fn as_millis(duration: Duration) -> Option<u64> {
    u64::try_from(duration.as_millis()).ok()
}

impl SiteConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "hurf", "hurf-site")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Whether a configuration file has been written yet
    pub fn exists() -> bool {
        Self::config_path().is_some_and(|path| path.exists())
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`, or the defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Every setting spelled out with the value currently in effect
    pub fn filled(&self) -> Self {
        let rotation = self.rotation_timings();
        let notice = self.notice_timings();
        let thresholds = self.chrome_thresholds();
        let splash = self.splash_timings();
        Self {
            rotate_interval_ms: as_millis(rotation.interval),
            resume_after_ms: as_millis(rotation.resume_after),
            notice_ms: as_millis(notice.visible),
            notice_exit_ms: notice.exit.and_then(as_millis),
            banner_ms: as_millis(self.banner_timings().visible),
            splash_ms: as_millis(splash.hold),
            splash_scroll_ms: as_millis(splash.scroll),
            header_scroll_threshold: Some(thresholds.header_scrolled),
            back_to_top_threshold: Some(thresholds.back_to_top),
            mobile_breakpoint: Some(thresholds.mobile_breakpoint),
            sink: Some(self.sink_kind()),
            outbox_path: self.outbox_path(),
        }
    }

    pub fn rotation_timings(&self) -> RotationTimings {
        RotationTimings {
            interval: millis(self.rotate_interval_ms, AUTO_ROTATE_DELAY),
            resume_after: millis(self.resume_after_ms, RESUME_AFTER_CLICK),
        }
    }

    /// Floating notice lifetime
    pub fn notice_timings(&self) -> NoticeTimings {
        let standard = NoticeTimings::STANDARD;
        NoticeTimings {
            visible: millis(self.notice_ms, standard.visible),
            exit: standard.exit.map(|exit| millis(self.notice_exit_ms, exit)),
        }
    }

    /// Success banner lifetime
    pub fn banner_timings(&self) -> NoticeTimings {
        NoticeTimings {
            visible: millis(self.banner_ms, NoticeTimings::BANNER.visible),
            ..NoticeTimings::BANNER
        }
    }

    pub fn splash_timings(&self) -> SplashTimings {
        let defaults = SplashTimings::default();
        SplashTimings {
            hold: millis(self.splash_ms, defaults.hold),
            scroll: millis(self.splash_scroll_ms, defaults.scroll),
        }
    }

    pub fn chrome_thresholds(&self) -> ChromeThresholds {
        ChromeThresholds {
            header_scrolled: self.header_scroll_threshold.unwrap_or(HEADER_SCROLL_THRESHOLD),
            back_to_top: self.back_to_top_threshold.unwrap_or(BACK_TO_TOP_THRESHOLD),
            mobile_breakpoint: self.mobile_breakpoint.unwrap_or(MOBILE_BREAKPOINT),
        }
    }

    pub fn sink_kind(&self) -> SinkKind {
        self.sink.unwrap_or_default()
    }

    /// Outbox file, falling back to `outbox.jsonl` in the data directory
    pub fn outbox_path(&self) -> Option<PathBuf> {
        self.outbox_path.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_dir().join("outbox.jsonl"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert!(config.rotate_interval_ms.is_none());
        assert!(config.sink.is_none());
        assert_eq!(config.sink_kind(), SinkKind::Log);
    }

    #[test]
    fn test_defaults_match_site_timings() {
        let config = SiteConfig::default();
        assert_eq!(config.rotation_timings(), RotationTimings::default());
        assert_eq!(config.notice_timings(), NoticeTimings::STANDARD);
        assert_eq!(config.banner_timings(), NoticeTimings::BANNER);
        assert_eq!(config.chrome_thresholds(), ChromeThresholds::default());
        assert_eq!(config.splash_timings(), SplashTimings::default());
    }

    #[test]
    fn test_splash_overrides_apply() {
        let config = SiteConfig {
            splash_ms: Some(0),
            splash_scroll_ms: Some(250),
            ..Default::default()
        };
        let timings = config.splash_timings();
        assert_eq!(timings.hold, Duration::ZERO);
        assert_eq!(timings.scroll, Duration::from_millis(250));
        assert_eq!(config.filled().splash_scroll_ms, Some(250));
    }

    #[test]
    fn test_overrides_apply() {
        let config = SiteConfig {
            rotate_interval_ms: Some(1000),
            back_to_top_threshold: Some(10),
            ..Default::default()
        };
        assert_eq!(config.rotation_timings().interval, Duration::from_millis(1000));
        assert_eq!(
            config.rotation_timings().resume_after,
            Duration::from_millis(30_000)
        );
        assert_eq!(config.chrome_thresholds().back_to_top, 10);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: SiteConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.notice_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"sink": "outbox", "unknown_field": "value"}"#;
        let parsed: SiteConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.sink_kind(), SinkKind::Outbox);
    }

    #[test]
    fn test_serialization_roundtrip_keeps_paths() {
        let config = SiteConfig {
            outbox_path: Some(PathBuf::from("/tmp/outbox.jsonl")),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.outbox_path(), Some(PathBuf::from("/tmp/outbox.jsonl")));
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = SiteConfig {
            rotate_interval_ms: Some(5000),
            sink: Some(SinkKind::Outbox),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let loaded = SiteConfig::load_from(&path).unwrap();

        assert_eq!(loaded.rotate_interval_ms, Some(5000));
        assert_eq!(loaded.sink_kind(), SinkKind::Outbox);
        assert!(loaded.notice_ms.is_none());
    }

    #[test]
    fn test_saved_file_is_pretty_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        SiteConfig::default().save_to(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'));
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = SiteConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.rotate_interval_ms.is_none());
    }

    #[test]
    fn test_load_from_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(SiteConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_filled_keeps_effective_values() {
        let config = SiteConfig {
            banner_ms: Some(1200),
            outbox_path: Some(PathBuf::from("/tmp/outbox.jsonl")),
            ..Default::default()
        };
        let filled = config.filled();

        assert_eq!(filled.rotate_interval_ms, Some(8000));
        assert_eq!(filled.resume_after_ms, Some(30_000));
        assert_eq!(filled.notice_ms, Some(4000));
        assert_eq!(filled.notice_exit_ms, Some(300));
        assert_eq!(filled.banner_ms, Some(1200));
        assert_eq!(filled.header_scroll_threshold, Some(50));
        assert_eq!(filled.sink, Some(SinkKind::Log));
        assert_eq!(filled.rotation_timings(), config.rotation_timings());
        assert_eq!(filled.banner_timings(), config.banner_timings());
    }

    #[test]
    fn test_load_returns_ok() {
        // Load should return default config when file doesn't exist
        let result = SiteConfig::load();
        assert!(result.is_ok());
    }
}
