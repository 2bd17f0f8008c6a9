//! Serializable report structs for `--json` output.

use palette_kit::{ContrastReport, Hsl, Rgb, SchemeKind};
use serde::Serialize;

/// One palette color in machine-readable form.
#[derive(Debug, Serialize)]
pub struct ColorEntry {
    pub hex: String,
    pub rgb: [u8; 3],
    /// Rounded HSL components: degrees, percent, percent.
    pub hsl: [i32; 3],
}

impl From<Rgb> for ColorEntry {
    fn from(color: Rgb) -> Self {
        let hsl = Hsl::from(color);
        Self {
            hex: color.to_hex(),
            rgb: color.to_bytes(),
            hsl: [
                hsl.h.round() as i32,
                (hsl.s * 100.0).round() as i32,
                (hsl.l * 100.0).round() as i32,
            ],
        }
    }
}

/// Report for the `extract` command.
#[derive(Debug, Serialize)]
pub struct PaletteReport {
    pub source: String,
    pub colors: Vec<ColorEntry>,
    pub exports: ExportBlock,
}

/// The six export formats.
#[derive(Debug, Serialize)]
pub struct ExportBlock {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub css: String,
    pub tailwind: String,
    pub scss: String,
}

impl ExportBlock {
    pub fn from_colors(colors: &[Rgb], angle: u32) -> Self {
        use palette_kit::export;
        Self {
            hex: export::hex_list(colors),
            rgb: export::rgb_list(colors),
            hsl: export::hsl_list(colors),
            css: export::css_gradient(colors, angle),
            tailwind: export::tailwind_classes(colors),
            scss: export::scss_variables(colors),
        }
    }
}

/// Report for the `scheme` command.
#[derive(Debug, Serialize)]
pub struct SchemeReport {
    pub base: ColorEntry,
    pub kind: String,
    pub colors: Vec<ColorEntry>,
}

impl SchemeReport {
    pub fn new(base: Rgb, kind: SchemeKind, colors: &[Rgb]) -> Self {
        Self {
            base: base.into(),
            kind: kind.name().to_string(),
            colors: colors.iter().copied().map(ColorEntry::from).collect(),
        }
    }
}

/// Report for the `contrast` command.
#[derive(Debug, Serialize)]
pub struct ContrastJson {
    pub foreground: ColorEntry,
    pub background: ColorEntry,
    pub ratio: f64,
    pub passes_aa: bool,
    pub passes_aaa: bool,
}

impl ContrastJson {
    pub fn new(foreground: Rgb, background: Rgb, report: ContrastReport) -> Self {
        Self {
            foreground: foreground.into(),
            background: background.into(),
            ratio: report.ratio,
            passes_aa: report.passes_aa,
            passes_aaa: report.passes_aaa,
        }
    }
}
