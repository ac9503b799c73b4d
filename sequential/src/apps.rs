use common::{App, Error, MapFn, ReduceFn, Result};

pub const APP_NAMES: [&str; 6] = ["ext", "grep", "names", "parity", "square", "sum"];

pub fn load(app_name: &str) -> Result<App> {
    let (map, reduce): (MapFn, ReduceFn) = match app_name {
        "ext" => (app_ext::map, app_ext::reduce),
        "grep" => (app_grep::map, app_grep::reduce),
        "names" => (app_names::map, app_names::reduce),
        "parity" => (app_parity::map, app_parity::reduce),
        "square" => (app_square::map, app_square::reduce),
        "sum" => (app_sum::map, app_sum::reduce),
        _ => return Err(Error::UnknownApp(app_name.to_string())),
    };
    Ok(App::new(app_name, map, reduce))
}
