//! Human-readable tree view of the consolidated forest.

use crate::export::RenderOptions;
use crate::models::consolidated::ConsolidatedContext;
use crate::utils::formatting::{describe_time, pad_right};
use crate::utils::time::format_timestamp;
use ansi_term::Colour::{Cyan, Fixed, Green, Yellow};
use unicode_width::UnicodeWidthStr;

pub(crate) fn render_tree(forest: &[ConsolidatedContext], opts: &RenderOptions) -> String {
    if forest.is_empty() {
        return "No contexts.\n".to_string();
    }

    let width = forest
        .iter()
        .flat_map(|root| root.walk())
        .map(|(depth, c)| depth * 4 + UnicodeWidthStr::width(c.name.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let last = forest.len() - 1;
    for (i, root) in forest.iter().enumerate() {
        render_node(root, "", i == last, true, width, opts, &mut out);
    }
    out
}

fn render_node(
    ctx: &ConsolidatedContext,
    prefix: &str,
    is_last: bool,
    is_root: bool,
    width: usize,
    opts: &RenderOptions,
    out: &mut String,
) {
    let branch = match (is_root, is_last) {
        (true, _) => "",
        (false, true) => "└── ",
        (false, false) => "├── ",
    };
    let label = format!("{prefix}{branch}{}", ctx.name);
    let time = describe_time(ctx.time_spent.time, &ctx.time_spent.unit);
    let span = match &ctx.completed {
        Some(done) => format!(
            "{} → {}",
            format_timestamp(&ctx.created),
            format_timestamp(done)
        ),
        None => format!("{} → (open)", format_timestamp(&ctx.created)),
    };

    let label = pad_right(&label, width);
    if opts.color {
        let time = if ctx.is_open() {
            Yellow.paint(time).to_string()
        } else {
            Green.paint(time).to_string()
        };
        out.push_str(&format!(
            "{}  {}  {}\n",
            Cyan.bold().paint(label),
            time,
            Fixed(8).paint(span)
        ));
    } else {
        out.push_str(&format!("{label}  {time}  {span}\n"));
    }

    let child_prefix = match (is_root, is_last) {
        (true, _) => prefix.to_string(),
        (false, true) => format!("{prefix}    "),
        (false, false) => format!("{prefix}│   "),
    };

    let note_prefix = if ctx.sub_contexts.is_empty() {
        format!("{child_prefix}  ")
    } else {
        format!("{child_prefix}│ ")
    };
    let wrap = opts
        .wrap_width
        .saturating_sub(UnicodeWidthStr::width(note_prefix.as_str()) + 2)
        .max(20);
    for note in &ctx.notes {
        for (i, line) in textwrap::wrap(note, wrap).iter().enumerate() {
            let bullet = if i == 0 { "- " } else { "  " };
            out.push_str(&format!("{note_prefix}{bullet}{line}\n"));
        }
    }

    let last = ctx.sub_contexts.len().saturating_sub(1);
    for (i, child) in ctx.sub_contexts.iter().enumerate() {
        render_node(child, &child_prefix, i == last, false, width, opts, out);
    }
}
