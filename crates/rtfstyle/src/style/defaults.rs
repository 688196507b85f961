//! Compiled-in default styles.
//!
//! A dozen styles are spelled out literally. The rest come in families that
//! repeat one clause across the [`MAX_INDENT_LEVELS`] nesting levels, each
//! level chaining `\snext` to the level below it and indenting by
//! [`INDENT_TWIPS`].

/// Number of nesting levels generated for each style family.
pub const MAX_INDENT_LEVELS: u32 = 14;

/// Indentation step between two nesting levels, in twips.
pub const INDENT_TWIPS: u32 = 360;

/// A default style as compiled into the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultStyle {
    /// Lookup name used by style sheet files.
    pub name: String,
    /// Formatting codes, starting with the `\s<n>` marker.
    pub reference: String,
    /// Linkage section.
    pub definition: String,
}

impl DefaultStyle {
    fn new(name: impl Into<String>, reference: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reference: reference.into(),
            definition: definition.into(),
        }
    }
}

/// Position of one generated style within its family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Level {
    level: u32,
    /// Clause marker number of this level.
    nest: u32,
    /// Clause marker number of the style that follows it.
    next: u32,
    /// Left indent in twips.
    pos: u32,
}

fn levels(base: u32, first_pos: u32) -> impl Iterator<Item = Level> {
    (0..MAX_INDENT_LEVELS).map(move |level| Level {
        level,
        nest: base + level,
        next: base + (level + 1).min(MAX_INDENT_LEVELS - 1),
        pos: first_pos + level * INDENT_TWIPS,
    })
}

const FIXED: &[(&str, &str, &str)] = &[
    (
        "Heading1",
        "\\s1\\sb240\\sa60\\keepn\\widctlpar\\adjustright \\b\\f1\\fs36\\kerning36\\cgrid ",
        "\\sbasedon0 \\snext0 heading 1",
    ),
    (
        "Heading2",
        "\\s2\\sb240\\sa60\\keepn\\widctlpar\\adjustright \\b\\f1\\fs28\\kerning28\\cgrid ",
        "\\sbasedon0 \\snext0 heading 2",
    ),
    (
        "Heading3",
        "\\s3\\sb240\\sa60\\keepn\\widctlpar\\adjustright \\b\\f1\\cgrid ",
        "\\sbasedon0 \\snext0 heading 3",
    ),
    (
        "Heading4",
        "\\s4\\sb240\\sa60\\keepn\\widctlpar\\adjustright \\b\\f1\\fs20\\cgrid ",
        "\\sbasedon0 \\snext0 heading 4;}{\\*\\cs10 \\additive Default Paragraph Font",
    ),
    (
        "Heading5",
        "\\s5\\sb90\\sa30\\keepn\\widctlpar\\adjustright \\b\\f1\\fs20\\cgrid ",
        "\\sbasedon0 \\snext0 heading 5;}{\\*\\cs10 \\additive Default Paragraph Font",
    ),
    (
        "Title",
        "\\s15\\qc\\sb240\\sa60\\widctlpar\\outlinelevel0\\adjustright \\b\\f1\\fs32\\kerning28\\cgrid ",
        "\\sbasedon0 \\snext15 Title",
    ),
    (
        "SubTitle",
        "\\s16\\qc\\sa60\\widctlpar\\outlinelevel1\\adjustright \\f1\\cgrid ",
        "\\sbasedon0 \\snext16 Subtitle",
    ),
    (
        "BodyText",
        "\\s17\\sa60\\sb30\\widctlpar\\qj \\fs22\\cgrid ",
        "\\sbasedon0 \\snext17 BodyText",
    ),
    (
        "DenseText",
        "\\s18\\widctlpar\\fs22\\cgrid ",
        "\\sbasedon0 \\snext18 DenseText",
    ),
    (
        "Header",
        "\\s28\\widctlpar\\tqc\\tx4320\\tqr\\tx8640\\adjustright \\fs20\\cgrid ",
        "\\sbasedon0 \\snext28 header",
    ),
    (
        "Footer",
        "\\s29\\widctlpar\\tqc\\tx4320\\tqr\\tx8640\\qr\\adjustright \\fs20\\cgrid ",
        "\\sbasedon0 \\snext29 footer",
    ),
    (
        "GroupHeader",
        "\\s30\\li360\\sa60\\sb120\\keepn\\widctlpar\\adjustright \\b\\f1\\fs20\\cgrid ",
        "\\sbasedon0 \\snext30 GroupHeader",
    ),
];

/// Returns every default style in definition order.
pub fn default_styles() -> Vec<DefaultStyle> {
    let mut styles: Vec<DefaultStyle> = FIXED
        .iter()
        .map(|&(name, reference, definition)| DefaultStyle::new(name, reference, definition))
        .collect();

    styles.extend(levels(40, 0).map(|l| {
        DefaultStyle::new(
            format!("CodeExample{}", l.level),
            format!(
                "\\s{}\\li{}\\widctlpar\\adjustright \\shading1000\\cbpat8 \\f2\\fs16\\cgrid ",
                l.nest, l.pos
            ),
            format!("\\sbasedon0 \\snext{} Code Example {}", l.next, l.level),
        )
    }));

    styles.extend(levels(60, 0).map(|l| {
        DefaultStyle::new(
            format!("ListContinue{}", l.level),
            format!(
                "\\s{}\\li{}\\sa60\\sb30\\qj\\widctlpar\\qj\\adjustright \\fs20\\cgrid ",
                l.nest, l.pos
            ),
            format!("\\sbasedon0 \\snext{} List Continue {}", l.next, l.level),
        )
    }));

    styles.extend(levels(80, 0).map(|l| {
        DefaultStyle::new(
            format!("DescContinue{}", l.level),
            format!(
                "\\s{}\\li{}\\widctlpar\\ql\\adjustright \\fs20\\cgrid ",
                l.nest, l.pos
            ),
            format!("\\sbasedon0 \\snext{} DescContinue {}", l.next, l.level),
        )
    }));

    styles.extend(levels(100, 0).map(|l| {
        // spacing shrinks by 3 twips per level down to a floor of 3
        let twips = 30u32.saturating_sub(3 * l.level).max(3);
        DefaultStyle::new(
            format!("LatexTOC{}", l.level),
            format!(
                "\\s{}\\li{}\\sa{twips}\\sb{twips}\\widctlpar\\tqr\\tldot\\tx8640\\adjustright \\fs20\\cgrid ",
                l.nest, l.pos
            ),
            format!("\\sbasedon0 \\snext{} LatexTOC {}", l.next, l.level),
        )
    }));

    styles.extend(levels(120, INDENT_TWIPS).map(|l| {
        DefaultStyle::new(
            format!("ListBullet{}", l.level),
            format!(
                "\\s{nest}\\fi-360\\li{pos}\\widctlpar\\jclisttab\\tx{pos}{{\\*\\pn \\pnlvlbody\\ilvl0\\ls{list}\\pnrnot0\\pndec }}\\ls1\\adjustright \\fs20\\cgrid ",
                nest = l.nest,
                pos = l.pos,
                list = l.level + 1,
            ),
            format!("\\sbasedon0 \\snext{} \\sautoupd List Bullet {}", l.next, l.level),
        )
    }));

    styles.extend(levels(140, INDENT_TWIPS).map(|l| {
        DefaultStyle::new(
            format!("ListEnum{}", l.level),
            format!("\\s{}\\fi-360\\li{}\\widctlpar\\fs20\\cgrid ", l.nest, l.pos),
            format!("\\sbasedon0 \\snext{} \\sautoupd List Enum {}", l.next, l.level),
        )
    }));

    styles
}
