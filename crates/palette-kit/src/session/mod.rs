//! The session facade -- the crate's command interface.
//!
//! [`Session`] owns the palette, the color wheel, and the gradient
//! settings, and exposes the operations UI glue invokes: upload an image,
//! move the lightness slider, pick from the wheel, derive schemes, check
//! contrast, and export. All commands run synchronously to completion on
//! the calling thread.

mod error;

pub use error::SessionError;

use crate::color::Rgb;
use crate::contrast::ContrastReport;
use crate::export::{self, GradientKind};
use crate::palette::PaletteStore;
use crate::quantize;
use crate::scheme::SchemeKind;
use crate::wheel::{ColorWheel, DEFAULT_DIAMETER};

/// Default gradient angle in degrees.
pub const DEFAULT_GRADIENT_ANGLE: u32 = 90;

/// One palette-editing session.
///
/// Created empty, lives in memory for its lifetime, and holds every
/// piece of mutable state the pipeline needs: the bounded palette, the
/// rendered wheel with its picker, and the gradient settings. Multiple
/// sessions are fully independent.
///
/// # Example
///
/// ```
/// use palette_kit::{Session, SchemeKind};
///
/// let mut session = Session::new();
/// session.add_color_from_hex("#ff5733").unwrap();
///
/// session.pick(150, 90).unwrap();
/// for color in session.scheme_colors(SchemeKind::Analogous).unwrap() {
///     println!("{color}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    palette: PaletteStore,
    wheel: ColorWheel,
    gradient_kind: GradientKind,
    gradient_angle: u32,
}

impl Session {
    /// Create an empty session with a default wheel.
    pub fn new() -> Self {
        Self {
            palette: PaletteStore::new(),
            wheel: ColorWheel::new(DEFAULT_DIAMETER, 0.5),
            gradient_kind: GradientKind::Linear,
            gradient_angle: DEFAULT_GRADIENT_ANGLE,
        }
    }

    /// Read-only view of the palette colors, in insertion order.
    #[inline]
    pub fn palette(&self) -> &[Rgb] {
        self.palette.colors()
    }

    /// The wheel, for raster access and picker state.
    #[inline]
    pub fn wheel(&self) -> &ColorWheel {
        &self.wheel
    }

    /// Current gradient shape and angle.
    #[inline]
    pub fn gradient(&self) -> (GradientKind, u32) {
        (self.gradient_kind, self.gradient_angle)
    }

    // ---- palette commands ----------------------------------------------

    /// Quantize an uploaded RGBA image and replace the palette with its
    /// dominant colors.
    ///
    /// This is the one command that resets the palette rather than
    /// appending to it.
    pub fn apply_upload(
        &mut self,
        rgba: &[u8],
        width: u32,
        height: u32,
    ) -> Result<&[Rgb], SessionError> {
        let dominant = quantize::dominant_colors(rgba, width, height)?;
        self.palette.replace_all(dominant);
        Ok(self.palette.colors())
    }

    /// Parse a hex string (a missing `#` is tolerated) and append the
    /// color to the palette.
    pub fn add_color_from_hex(&mut self, input: &str) -> Result<Rgb, SessionError> {
        let color: Rgb = input.parse()?;
        self.palette.push(color);
        Ok(color)
    }

    /// Remove the palette color at `index`.
    pub fn remove_color(&mut self, index: usize) -> Result<Rgb, SessionError> {
        Ok(self.palette.remove_at(index)?)
    }

    /// Remove all palette colors.
    pub fn clear_palette(&mut self) {
        self.palette.clear();
    }

    // ---- wheel commands ------------------------------------------------

    /// Move the lightness slider: re-render the wheel and refresh the
    /// current selection against the new raster.
    pub fn set_wheel_lightness(&mut self, lightness: f32) {
        self.wheel.set_lightness(lightness);
    }

    /// Pick the wheel color at pixel `(x, y)`; `None` outside the disk.
    pub fn pick(&mut self, x: u32, y: u32) -> Option<Rgb> {
        self.wheel.pick(x, y)
    }

    /// Append the currently picked wheel color to the palette.
    pub fn add_picked_color(&mut self) -> Result<Rgb, SessionError> {
        let color = self.wheel.current_color().ok_or(SessionError::NoSelection)?;
        self.palette.push(color);
        Ok(color)
    }

    // ---- scheme commands -----------------------------------------------

    /// Derive `kind`'s harmonics from the currently picked wheel color.
    pub fn scheme_colors(&self, kind: SchemeKind) -> Result<Vec<Rgb>, SessionError> {
        let base = self.wheel.current_color().ok_or(SessionError::NoSelection)?;
        Ok(kind.generate(base))
    }

    /// Append one color of the current scheme (by its position in the
    /// scheme, base first) to the palette.
    pub fn add_scheme_color(&mut self, kind: SchemeKind, index: usize) -> Result<Rgb, SessionError> {
        let colors = self.scheme_colors(kind)?;
        let color = *colors
            .get(index)
            .ok_or(SessionError::IndexOutOfRange {
                index,
                len: colors.len(),
            })?;
        self.palette.push(color);
        Ok(color)
    }

    // ---- contrast ------------------------------------------------------

    /// Evaluate WCAG contrast between two palette colors selected by
    /// index.
    ///
    /// Selections are explicit options: `None` on either side reports
    /// [`SessionError::NoSelection`] (index 0 and "nothing selected" are
    /// distinct values). A stale `Some` index reports
    /// [`SessionError::IndexOutOfRange`].
    pub fn check_contrast(
        &self,
        foreground: Option<usize>,
        background: Option<usize>,
    ) -> Result<ContrastReport, SessionError> {
        let (fg_idx, bg_idx) = match (foreground, background) {
            (Some(fg), Some(bg)) => (fg, bg),
            _ => return Err(SessionError::NoSelection),
        };
        let fg = self.lookup(fg_idx)?;
        let bg = self.lookup(bg_idx)?;
        Ok(ContrastReport::evaluate(fg, bg))
    }

    fn lookup(&self, index: usize) -> Result<Rgb, SessionError> {
        self.palette.get(index).ok_or(SessionError::IndexOutOfRange {
            index,
            len: self.palette.len(),
        })
    }

    // ---- gradient & export ---------------------------------------------

    /// Set the gradient preview shape and angle.
    pub fn set_gradient(&mut self, kind: GradientKind, angle: u32) {
        self.gradient_kind = kind;
        self.gradient_angle = angle;
    }

    /// The gradient preview value for the current palette and settings.
    pub fn gradient_preview(&self) -> String {
        export::gradient_css(self.palette.colors(), self.gradient_kind, self.gradient_angle)
    }

    /// Comma-space-joined hex export.
    pub fn export_hex(&self) -> String {
        export::hex_list(self.palette.colors())
    }

    /// Comma-space-joined `rgb()` export.
    pub fn export_rgb(&self) -> String {
        export::rgb_list(self.palette.colors())
    }

    /// Comma-space-joined `hsl()` export.
    pub fn export_hsl(&self) -> String {
        export::hsl_list(self.palette.colors())
    }

    /// CSS `background:` gradient declaration at the current angle.
    pub fn export_css(&self) -> String {
        export::css_gradient(self.palette.colors(), self.gradient_angle)
    }

    /// Tailwind class export.
    pub fn export_tailwind(&self) -> String {
        export::tailwind_classes(self.palette.colors())
    }

    /// SCSS variable export.
    pub fn export_scss(&self) -> String {
        export::scss_variables(self.palette.colors())
    }

    /// All six formats as one labeled block.
    pub fn export_all(&self) -> String {
        export::all_formats(self.palette.colors(), self.gradient_angle)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.palette().is_empty());
        assert!(session.wheel().current_color().is_none());
        assert_eq!(session.gradient(), (GradientKind::Linear, 90));
    }

    #[test]
    fn test_add_color_from_hex_normalizes() {
        let mut session = Session::new();
        let color = session.add_color_from_hex("ff5733").unwrap();
        assert_eq!(color, Rgb::new(255, 87, 51));
        assert_eq!(session.palette(), &[Rgb::new(255, 87, 51)]);
        assert_eq!(session.export_hex(), "#ff5733");
    }

    #[test]
    fn test_add_color_from_hex_rejects_garbage() {
        let mut session = Session::new();
        assert!(matches!(
            session.add_color_from_hex("not-a-color"),
            Err(SessionError::InvalidColor(_))
        ));
        // A rejected input is not applied.
        assert!(session.palette().is_empty());
    }

    #[test]
    fn test_apply_upload_replaces_palette() {
        let mut session = Session::new();
        session.add_color_from_hex("#123456").unwrap();

        // Solid 10x10 image: one dominant bucket, previous content gone.
        let rgba = [96u8, 96, 96, 255].repeat(100);
        let palette = session.apply_upload(&rgba, 10, 10).unwrap().to_vec();
        assert_eq!(palette, vec![Rgb::new(96, 96, 96)]);
        assert_eq!(session.palette(), &palette[..]);
    }

    #[test]
    fn test_add_picked_color_requires_selection() {
        let mut session = Session::new();
        assert!(matches!(
            session.add_picked_color(),
            Err(SessionError::NoSelection)
        ));

        session.pick(90, 90).unwrap();
        let color = session.add_picked_color().unwrap();
        assert_eq!(session.palette(), &[color]);
    }

    #[test]
    fn test_scheme_requires_selection() {
        let session = Session::new();
        assert!(matches!(
            session.scheme_colors(SchemeKind::Triadic),
            Err(SessionError::NoSelection)
        ));
    }

    #[test]
    fn test_add_scheme_color() {
        let mut session = Session::new();
        session.pick(150, 90).unwrap();

        let scheme = session.scheme_colors(SchemeKind::Complementary).unwrap();
        let added = session.add_scheme_color(SchemeKind::Complementary, 1).unwrap();
        assert_eq!(added, scheme[1]);
        assert_eq!(session.palette(), &[added]);

        assert!(matches!(
            session.add_scheme_color(SchemeKind::Complementary, 2),
            Err(SessionError::IndexOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_check_contrast_selection_handling() {
        let mut session = Session::new();
        session.add_color_from_hex("#000000").unwrap();
        session.add_color_from_hex("#ffffff").unwrap();

        // Missing either side is an empty state, not a failure of the math.
        assert!(matches!(
            session.check_contrast(None, Some(1)),
            Err(SessionError::NoSelection)
        ));
        assert!(matches!(
            session.check_contrast(Some(0), None),
            Err(SessionError::NoSelection)
        ));

        // Index 0 is a real selection, distinct from None.
        let report = session.check_contrast(Some(0), Some(1)).unwrap();
        assert!((report.ratio - 21.0).abs() < 1e-6);
        assert!(report.passes_aaa);

        // Stale index.
        assert!(matches!(
            session.check_contrast(Some(0), Some(9)),
            Err(SessionError::IndexOutOfRange { index: 9, len: 2 })
        ));
    }

    #[test]
    fn test_remove_color_guards_index() {
        let mut session = Session::new();
        session.add_color_from_hex("#ff0000").unwrap();

        assert!(session.remove_color(3).is_err());
        assert_eq!(session.palette().len(), 1, "failed remove must not corrupt state");

        session.remove_color(0).unwrap();
        assert!(session.palette().is_empty());
    }

    #[test]
    fn test_gradient_settings_flow_into_exports() {
        let mut session = Session::new();
        session.add_color_from_hex("#ff0000").unwrap();
        session.set_gradient(GradientKind::Radial, 45);

        assert_eq!(session.gradient_preview(), "radial-gradient(circle, rgb(255,0,0))");
        // The CSS export always uses the linear form with the stored angle.
        assert_eq!(
            session.export_css(),
            "background: linear-gradient(45deg, rgb(255,0,0));"
        );
    }

    #[test]
    fn test_set_wheel_lightness_refreshes_pick() {
        let mut session = Session::new();
        session.pick(150, 90).unwrap();
        let before = session.wheel().current_color().unwrap();

        session.set_wheel_lightness(0.95);
        let after = session.wheel().current_color().unwrap();
        assert_ne!(before, after);
    }
}
