use worker::*;

/// Canonical detail-view location in the Content Studio.
const STUDIO_PREFIX: &str = "/teacher/content-studio/";

/// Segment used when the route matched without an `id` value. Mirrors the
/// placeholder the legacy links produced; the destination treats it like any
/// other unknown identifier.
const MISSING_ID: &str = "undefined";

/// A computed navigation target. `target_path` is the verbatim concatenation
/// of the studio prefix and the id segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectInstruction {
    pub target_path: String,
}

/// Maps a worksheet id onto its Content Studio path. The id is opaque here:
/// no parsing, no escaping, no existence check.
pub fn studio_redirect(id: Option<&str>) -> RedirectInstruction {
    RedirectInstruction {
        target_path: format!("{}{}", STUDIO_PREFIX, id.unwrap_or(MISSING_ID)),
    }
}

pub async fn get_handler(req: Request, ctx: RouteContext<()>) -> Result<Response> {
    let id = ctx.param("id").map(String::as_str);
    if id.is_none() {
        console_warn!("worksheet redirect matched without an id segment");
    }
    let instruction = studio_redirect(id);
    Response::redirect(super::same_origin(&req.url()?, &instruction.target_path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_id_into_studio_path() {
        assert_eq!(
            studio_redirect(Some("abc123")).target_path,
            "/teacher/content-studio/abc123"
        );
    }

    #[test]
    fn empty_id_leaves_trailing_slash() {
        assert_eq!(studio_redirect(Some("")).target_path, "/teacher/content-studio/");
    }

    #[test]
    fn missing_id_falls_back_to_placeholder() {
        assert_eq!(
            studio_redirect(None).target_path,
            "/teacher/content-studio/undefined"
        );
    }

    #[test]
    fn id_passes_through_verbatim() {
        assert_eq!(
            studio_redirect(Some("a b%2Fc")).target_path,
            "/teacher/content-studio/a b%2Fc"
        );
    }

    #[test]
    fn repeated_calls_yield_identical_instructions() {
        assert_eq!(studio_redirect(Some("ws-9")), studio_redirect(Some("ws-9")));
    }
}
