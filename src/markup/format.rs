use std::fmt::{self, Write as _};

use crate::markup::model::{
    FLIP_DURATION, LevelNode, MarkupDocument, OpacityDirective, TransformDirective, TransformKind,
};

const INDENT: &str = "  ";

/// Line writer that tracks nesting depth.
struct Lines<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    depth: usize,
}

impl Lines<'_, '_> {
    fn line(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        for _ in 0..self.depth {
            self.f.write_str(INDENT)?;
        }
        self.f.write_fmt(args)?;
        self.f.write_char('\n')
    }

    fn open(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        self.line(args)?;
        self.depth += 1;
        Ok(())
    }

    fn close(&mut self, tag: &str) -> fmt::Result {
        self.depth = self.depth.saturating_sub(1);
        self.line(format_args!("</{tag}>"))
    }
}

/// `clock.begin+Ts; clock.repeatEvent+Ts`
struct Begin<'a> {
    clock: &'a str,
    at: f64,
}

impl fmt::Display for Begin<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{c}.begin+{t:.2}s; {c}.repeatEvent+{t:.2}s",
            c = self.clock,
            t = self.at
        )
    }
}

/// One end of a transform interpolation.
struct TransformValue(TransformKind, f64);

impl fmt::Display for TransformValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            TransformKind::Scale => write!(f, "{:.8}", self.1),
            // rotation about the local origin
            TransformKind::Rotate => write!(f, "{} 0 0", self.1),
        }
    }
}

fn write_opacity(out: &mut Lines<'_, '_>, clock: &str, d: &OpacityDirective) -> fmt::Result {
    out.line(format_args!(
        r#"<animate attributeName="opacity" from="{}" to="{}" begin="{}" dur="{:.2}s" fill="freeze" />"#,
        d.from,
        d.to,
        Begin {
            clock,
            at: d.begin
        },
        FLIP_DURATION,
    ))
}

fn write_transform(out: &mut Lines<'_, '_>, clock: &str, d: &TransformDirective) -> fmt::Result {
    out.line(format_args!(
        r#"<animateTransform attributeName="transform" type="{}" begin="{}" dur="{:.2}s" from="{}" to="{}" fill="freeze" />"#,
        d.kind.as_str(),
        Begin {
            clock,
            at: d.begin
        },
        d.duration,
        TransformValue(d.kind, d.from),
        TransformValue(d.kind, d.to),
    ))
}

fn write_level(out: &mut Lines<'_, '_>, doc: &MarkupDocument, node: &LevelNode) -> fmt::Result {
    let clock = doc.clock.id.as_str();
    let id = node.use_id();
    let hidden = if node.initially_hidden {
        r#" opacity="0""#
    } else {
        ""
    };

    out.line(format_args!("<!-- Level {} -->", node.level))?;
    out.open(format_args!(r#"<g id="rotate_{id}">"#))?;
    out.open(format_args!(r#"<g id="scale_{id}">"#))?;

    if node.opacity.is_empty() {
        out.line(format_args!(
            r##"<use href="#{}" id="{id}"{hidden} />"##,
            doc.shape_href
        ))?;
    } else {
        out.open(format_args!(
            r##"<use href="#{}" id="{id}"{hidden}>"##,
            doc.shape_href
        ))?;
        for d in &node.opacity {
            write_opacity(out, clock, d)?;
        }
        out.close("use")?;
    }

    for d in &node.scale {
        write_transform(out, clock, d)?;
    }
    out.close("g")?;

    for d in &node.rotate {
        write_transform(out, clock, d)?;
    }
    out.close("g")
}

impl fmt::Display for MarkupDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(comment) = &self.header_comment {
            writeln!(f, "{{{{/* {comment} */}}}}")?;
        }
        writeln!(f, "{{{{define \"{}\"}}}}", self.template_name)?;

        let mut out = Lines { f, depth: 0 };
        out.open(format_args!(
            r#"<g transform="translate({} {}) scale({})">"#,
            self.placement.x, self.placement.y, self.overall_scale
        ))?;
        out.line(format_args!(
            "<!-- Loop clock: everything else begins relative to this and re-triggers on repeats -->"
        ))?;
        out.line(format_args!(
            r#"<animate id="{}" attributeName="opacity" from="1" to="1" begin="0s" dur="{:.2}s" repeatCount="indefinite" />"#,
            self.clock.id, self.clock.duration
        ))?;

        for node in &self.levels {
            write_level(&mut out, self, node)?;
        }

        out.close("g")?;
        out.f.write_str("{{end}}\n")
    }
}

/// Serialize `doc` to template text.
pub fn render(doc: &MarkupDocument) -> String {
    doc.to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/markup/format.rs"]
mod tests;
