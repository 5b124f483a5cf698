use worker::*;

mod routes;

#[event(fetch)]
async fn fetch(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    console_error_panic_hook::set_once();

    Router::new()
        .get_async("/teacher/worksheets", routes::index::get_handler)
        .get_async("/teacher/worksheets/:id", routes::redirect::get_handler)
        .or_else_any_method_async("/*path", routes::not_found::handler)
        .run(req, env)
        .await
}
