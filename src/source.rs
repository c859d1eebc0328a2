//! Source and container size providers.
//!
//! The engine never inspects element types. A source only has to report its
//! intrinsic size, and a container only its current client size.

use crate::geometry::Size;

/// Anything that can report an intrinsic (native) size.
pub trait IntrinsicSize {
    /// Native dimensions, independent of container or scale.
    fn intrinsic_size(&self) -> Size;
}

/// A container whose current client size is read at computation time.
pub trait ClientSize {
    /// Current client width and height.
    fn client_size(&self) -> Size;
}

impl IntrinsicSize for Size {
    fn intrinsic_size(&self) -> Size {
        *self
    }
}

impl ClientSize for Size {
    fn client_size(&self) -> Size {
        *self
    }
}

impl<T: IntrinsicSize + ?Sized> IntrinsicSize for &T {
    fn intrinsic_size(&self) -> Size {
        (**self).intrinsic_size()
    }
}

impl<T: ClientSize + ?Sized> ClientSize for &T {
    fn client_size(&self) -> Size {
        (**self).client_size()
    }
}

/// A visual source, tagged by kind.
///
/// Images, vector images and canvases report their `width`/`height`
/// attributes. Videos report the decoded frame size instead.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Source {
    /// Raster image.
    Image { width: f64, height: f64 },
    /// Vector image element.
    VectorImage { width: f64, height: f64 },
    /// Drawing surface.
    Canvas { width: f64, height: f64 },
    /// Video; dimensions of the decoded frame.
    Video { video_width: f64, video_height: f64 },
}

impl Source {
    /// Raster image with the given attribute size.
    pub const fn image(width: f64, height: f64) -> Self {
        Self::Image { width, height }
    }

    /// Vector image with the given attribute size.
    pub const fn vector_image(width: f64, height: f64) -> Self {
        Self::VectorImage { width, height }
    }

    /// Canvas with the given surface size.
    pub const fn canvas(width: f64, height: f64) -> Self {
        Self::Canvas { width, height }
    }

    /// Video with the given decoded frame size.
    pub const fn video(video_width: f64, video_height: f64) -> Self {
        Self::Video {
            video_width,
            video_height,
        }
    }
}

impl IntrinsicSize for Source {
    fn intrinsic_size(&self) -> Size {
        match *self {
            Self::Image { width, height }
            | Self::VectorImage { width, height }
            | Self::Canvas { width, height } => Size::new(width, height),
            Self::Video {
                video_width,
                video_height,
            } => Size::new(video_width, video_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_reports_its_size() {
        assert_eq!(Source::image(40.0, 20.0).intrinsic_size(), Size::new(40.0, 20.0));
        assert_eq!(Source::vector_image(12.0, 8.0).intrinsic_size(), Size::new(12.0, 8.0));
        assert_eq!(Source::canvas(300.0, 150.0).intrinsic_size(), Size::new(300.0, 150.0));
        assert_eq!(Source::video(1920.0, 1080.0).intrinsic_size(), Size::new(1920.0, 1080.0));
    }

    #[test]
    fn references_forward() {
        let src = Source::image(5.0, 6.0);
        let r: &dyn IntrinsicSize = &src;
        assert_eq!((&r).intrinsic_size(), Size::new(5.0, 6.0));

        let container = Size::new(200.0, 100.0);
        assert_eq!((&container).client_size(), Size::new(200.0, 100.0));
    }
}
