use std::process::{Child, Command, Stdio};

/// A zoom range for a browser control. A fixed lock has all three values equal,
/// which disables pinch-zoom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLock {
    pub minimum: f32,
    pub maximum: f32,
    pub current: f32,
}
impl ZoomLock {
    pub fn fixed(scale: f32) -> Self {
        Self {
            minimum: scale,
            maximum: scale,
            current: scale,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.minimum == self.maximum && self.current == self.minimum
    }
}
impl std::fmt::Display for ZoomLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_fixed() {
            write!(f, "{:.0}% (locked)", self.current * 100.0)
        } else {
            write!(
                f,
                "{:.0}% ({:.0}%-{:.0}%)",
                self.current * 100.0,
                self.minimum * 100.0,
                self.maximum * 100.0
            )
        }
    }
}

#[derive(Debug)]
pub enum BrowserError {
    /// No browser command is configured.
    NoCommand,
    /// The browser process could not be started.
    Spawn {
        program: String,
        source: std::io::Error,
    },
}
impl std::fmt::Display for BrowserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrowserError::NoCommand => write!(f, "no browser command configured"),
            BrowserError::Spawn { program, source } => {
                write!(f, "failed to start {program}: {source}")
            }
        }
    }
}
impl std::error::Error for BrowserError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BrowserError::NoCommand => None,
            BrowserError::Spawn { source, .. } => Some(source),
        }
    }
}

/// The control a [`crate::WebView`] hosts: something that can show a URL.
pub trait EmbeddedBrowser {
    fn load(&mut self, url: &str) -> Result<(), BrowserError>;
    fn lock_zoom(&mut self, zoom: ZoomLock);
}
impl<B: EmbeddedBrowser + ?Sized> EmbeddedBrowser for Box<B> {
    fn load(&mut self, url: &str) -> Result<(), BrowserError> {
        (**self).load(url)
    }

    fn lock_zoom(&mut self, zoom: ZoomLock) {
        (**self).lock_zoom(zoom)
    }
}

/// Hands URLs to the desktop's browser by running an opener command.
///
/// A terminal can't host a browser, so the zoom lock is only recorded.
pub struct SystemBrowser {
    command: Vec<String>,
    zoom: Option<ZoomLock>,
    children: Vec<Child>,
}
impl SystemBrowser {
    /// `command` is the program followed by its arguments; the URL is appended
    /// last. `None` picks the platform's opener.
    pub fn new(command: Option<Vec<String>>) -> Self {
        Self {
            command: command.unwrap_or_else(Self::default_command),
            zoom: None,
            children: vec![],
        }
    }

    /// The platform's opener. On Windows this avoids `cmd /C start`, which
    /// would treat every `&` in a URL as a command separator.
    pub fn default_command() -> Vec<String> {
        let command: &[&str] = if cfg!(target_os = "windows") {
            &["rundll32", "url.dll,FileProtocolHandler"]
        } else if cfg!(target_os = "macos") {
            &["open"]
        } else {
            &["xdg-open"]
        };
        command.iter().map(|s| s.to_string()).collect()
    }

    /// Builds the opener invocation for `url`. The URL is always a single
    /// argument of its own.
    fn command_for(&self, url: &str) -> Result<Command, BrowserError> {
        let (program, args) = self
            .command
            .split_first()
            .ok_or(BrowserError::NoCommand)?;

        let mut command = Command::new(program);
        command
            .args(args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        Ok(command)
    }

    /// Reaps opener processes that have exited.
    fn reap(&mut self) {
        self.children
            .retain_mut(|child| matches!(child.try_wait(), Ok(None)));
    }
}
impl EmbeddedBrowser for SystemBrowser {
    fn load(&mut self, url: &str) -> Result<(), BrowserError> {
        self.reap();

        let mut command = self.command_for(url)?;
        let program = command.get_program().to_string_lossy().into_owned();
        let child = command.spawn().map_err(|source| BrowserError::Spawn {
            program: program.clone(),
            source,
        })?;

        tracing::info!("opened {url} with {program}");
        self.children.push(child);
        Ok(())
    }

    fn lock_zoom(&mut self, zoom: ZoomLock) {
        tracing::debug!("zoom locked to {zoom}");
        self.zoom = Some(zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_zoom_lock() {
        let zoom = ZoomLock::fixed(0.5);
        assert_eq!(zoom.minimum, 0.5);
        assert_eq!(zoom.maximum, 0.5);
        assert_eq!(zoom.current, 0.5);
        assert!(zoom.is_fixed());
        assert_eq!(zoom.to_string(), "50% (locked)");
    }

    #[test]
    fn test_unlocked_zoom_display() {
        let zoom = ZoomLock {
            minimum: 0.5,
            maximum: 2.0,
            current: 1.0,
        };
        assert!(!zoom.is_fixed());
        assert_eq!(zoom.to_string(), "100% (50%-200%)");
    }

    #[test]
    fn test_empty_command_is_an_error() {
        let mut browser = SystemBrowser::new(Some(vec![]));
        assert!(matches!(
            browser.load("https://example.com"),
            Err(BrowserError::NoCommand)
        ));
    }

    #[test]
    fn test_missing_program_is_an_error() {
        let mut browser =
            SystemBrowser::new(Some(vec!["webmark-no-such-browser-program".to_string()]));
        let err = browser.load("https://example.com").unwrap_err();
        assert!(matches!(err, BrowserError::Spawn { .. }));
        assert!(err.to_string().contains("webmark-no-such-browser-program"));
    }

    #[test]
    fn test_zoom_is_recorded() {
        let mut browser = SystemBrowser::new(None);
        assert_eq!(browser.zoom, None);
        browser.lock_zoom(ZoomLock::fixed(0.75));
        assert_eq!(browser.zoom, Some(ZoomLock::fixed(0.75)));
        assert!(!browser.command.is_empty());
    }

    fn args_of(command: &Command) -> Vec<String> {
        command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_url_is_passed_as_one_argument() {
        let url = "https://youtu.be/x&calc?autoplay=0&playsinline=1";
        let browser = SystemBrowser::new(Some(vec![
            "my-browser".to_string(),
            "--new-tab".to_string(),
        ]));
        let command = browser.command_for(url).unwrap();
        assert_eq!(command.get_program(), "my-browser");
        assert_eq!(args_of(&command), ["--new-tab", url]);
    }

    #[cfg(windows)]
    #[test]
    fn test_windows_opener_does_not_go_through_cmd() {
        let url = "https://youtu.be/xyz?autoplay=0&playsinline=1";
        let browser = SystemBrowser::new(None);
        let command = browser.command_for(url).unwrap();
        assert_eq!(command.get_program(), "rundll32");
        assert_eq!(args_of(&command), ["url.dll,FileProtocolHandler", url]);
        assert!(!browser.command.iter().any(|part| part.eq_ignore_ascii_case("cmd")));
    }
}
