/// Default size of an isolating frame, in CSS pixels.
pub const DEFAULT_FRAME_WIDTH: u32 = 400;
pub const DEFAULT_FRAME_HEIGHT: u32 = 300;

/// Settings for one preview run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    /// Linked from the preview document and from every isolating frame.
    pub stylesheet_href: String,
    /// Wrap out-of-flow selectors in an `<iframe>`.
    pub frames: bool,
    pub frame_width: u32,
    pub frame_height: u32,
}

impl PreviewOptions {
    pub fn new(stylesheet_href: impl Into<String>) -> Self {
        PreviewOptions {
            stylesheet_href: stylesheet_href.into(),
            frames: true,
            frame_width: DEFAULT_FRAME_WIDTH,
            frame_height: DEFAULT_FRAME_HEIGHT,
        }
    }

    pub fn with_frames(mut self, frames: bool) -> Self {
        self.frames = frames;
        self
    }

    pub fn with_frame_size(mut self, width: u32, height: u32) -> Self {
        self.frame_width = width;
        self.frame_height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = PreviewOptions::new("style.css");
        assert_eq!(opts.stylesheet_href, "style.css");
        assert!(opts.frames);
        assert_eq!((opts.frame_width, opts.frame_height), (400, 300));
    }

    #[test]
    fn test_builders() {
        let opts = PreviewOptions::new("a.css")
            .with_frames(false)
            .with_frame_size(640, 480);
        assert!(!opts.frames);
        assert_eq!((opts.frame_width, opts.frame_height), (640, 480));
    }
}
