use worker::*;

/// Landing page of the Content Studio.
const STUDIO_INDEX: &str = "/teacher/content-studio";

pub async fn get_handler(req: Request, _ctx: RouteContext<()>) -> Result<Response> {
    Response::redirect(super::same_origin(&req.url()?, STUDIO_INDEX))
}
