//! Tag — template rendering for the per-session CONTAINER_TAG field.
//!
//! The `tag` opt is a template over `{{.Field}}` placeholders in the
//! classic log-tag convention: `ID`, `FullID`, `Name`, `ImageID`,
//! `ImageFullID`, `ImageName`, `DaemonName`. The default template is
//! `{{.ID}}`. Rendering happens once at session setup; a malformed
//! template or an unknown field prevents the session from starting.

use super::context::{Context, OPT_TAG};
use super::error::DriverError;

pub const DEFAULT_TAG_TEMPLATE: &str = "{{.ID}}";

/// Render the session tag from the `tag` opt, falling back to the
/// default template when the opt is unset.
pub fn parse_log_tag(ctx: &Context) -> Result<String, DriverError> {
    let template = ctx
        .opts
        .get(OPT_TAG)
        .map(String::as_str)
        .unwrap_or(DEFAULT_TAG_TEMPLATE);
    render(template, ctx)
}

fn render(template: &str, ctx: &Context) -> Result<String, DriverError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{.") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 3..];
        let end = after.find("}}").ok_or_else(|| {
            DriverError::InvalidTagTemplate(format!("unterminated placeholder in '{template}'"))
        })?;
        let field = &after[..end];
        let value = expand(field, ctx).ok_or_else(|| {
            DriverError::InvalidTagTemplate(format!("unknown field '{field}' in '{template}'"))
        })?;
        out.push_str(value);
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

fn expand<'a>(field: &str, ctx: &'a Context) -> Option<&'a str> {
    match field {
        "ID" => Some(ctx.id()),
        "FullID" => Some(&ctx.container_id),
        "Name" => Some(ctx.name()),
        "ImageID" => Some(ctx.image_id()),
        "ImageFullID" => Some(&ctx.container_image_id),
        "ImageName" => Some(&ctx.container_image_name),
        "DaemonName" => Some(&ctx.daemon_name),
        _ => None,
    }
}
