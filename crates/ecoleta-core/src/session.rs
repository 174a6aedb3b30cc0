//! Form Workflow
//!
//! The loaders and the submit handler, written against the collaborator
//! traits. Callers apply the returned values to their own state; a failed
//! call returns the error and the caller leaves its state unchanged.

use crate::api::{CollectionApi, GeographyApi, ImageSource, Locator, Navigator};
use crate::error::ApiResult;
use crate::form::{is_selected, PointForm};
use crate::models::{Item, Position};

pub const HOME_ROUTE: &str = "/";
pub const CREATED_MESSAGE: &str = "Ponto de coleta criado!";

/// Position used to center the map on first render
pub async fn locate(locator: &impl Locator) -> ApiResult<Position> {
    let position = locator.current_position().await?;
    log::info!("[SESSION] Located at [{}, {}]", position.latitude, position.longitude);
    Ok(position)
}

pub async fn load_items(api: &impl CollectionApi) -> ApiResult<Vec<Item>> {
    let items = api.list_items().await?;
    log::info!("[SESSION] Loaded {} items", items.len());
    Ok(items)
}

pub async fn load_ufs(geo: &impl GeographyApi) -> ApiResult<Vec<String>> {
    let ufs = geo.list_ufs().await?;
    log::info!("[SESSION] Loaded {} UFs", ufs.len());
    Ok(ufs)
}

/// City list for `uf`, or `None` without any request while no UF is selected
pub async fn load_cities(geo: &impl GeographyApi, uf: &str) -> ApiResult<Option<Vec<String>>> {
    if !is_selected(uf) {
        return Ok(None);
    }
    let cities = geo.list_cities(uf).await?;
    log::info!("[SESSION] Loaded {} cities for {}", cities.len(), uf);
    Ok(Some(cities))
}

/// Replace `current` with a loaded value. A failure is logged and leaves
/// `current` as it was. Returns whether anything changed.
pub fn apply_loaded<T>(current: &mut T, loaded: ApiResult<T>, what: &str) -> bool {
    match loaded {
        Ok(value) => {
            *current = value;
            true
        }
        Err(e) => {
            log::error!("[SESSION] Loading {}: {}", what, e);
            false
        }
    }
}

/// Read the picked image into the form, then submit it.
/// If the image cannot be read nothing is posted.
pub async fn submit_with_image(
    api: &impl CollectionApi,
    navigator: &impl Navigator,
    mut form: PointForm,
    picked: Option<&impl ImageSource>,
) -> ApiResult<()> {
    if let Some(source) = picked {
        form.set_image(source.read_image().await?);
    }
    submit(api, navigator, &form).await
}

/// Post the form, then confirm and go home. On failure nothing is shown.
pub async fn submit(
    api: &impl CollectionApi,
    navigator: &impl Navigator,
    form: &PointForm,
) -> ApiResult<()> {
    api.create_point(form.payload()).await?;
    log::info!("[SESSION] Point {:?} created", form.fields.name);
    navigator.alert(CREATED_MESSAGE);
    navigator.navigate(HOME_ROUTE);
    Ok(())
}
