//! Workflow Integration Tests
//!
//! Drives the loaders and submit handler against in-memory collaborators.

#[cfg(test)]
mod tests {
    use crate::api::{CollectionApi, GeographyApi, ImageSource, Locator, Navigator};
    use crate::error::{ApiError, ApiResult};
    use crate::form::{PointForm, UNSELECTED};
    use crate::models::{Item, Position, UploadedImage};
    use crate::payload::PointPayload;
    use crate::session::{self, CREATED_MESSAGE, HOME_ROUTE};
    use async_trait::async_trait;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeCollection {
        items: Vec<Item>,
        fail: bool,
        posted: RefCell<Vec<PointPayload>>,
    }

    #[async_trait(?Send)]
    impl CollectionApi for FakeCollection {
        async fn list_items(&self) -> ApiResult<Vec<Item>> {
            if self.fail {
                return Err(ApiError::Status { url: "itens".to_string(), status: 503 });
            }
            Ok(self.items.clone())
        }

        async fn create_point(&self, payload: PointPayload) -> ApiResult<()> {
            if self.fail {
                return Err(ApiError::Status { url: "points".to_string(), status: 500 });
            }
            self.posted.borrow_mut().push(payload);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeGeography {
        cities: HashMap<String, Vec<String>>,
        city_requests: RefCell<Vec<String>>,
        down: bool,
    }

    #[async_trait(?Send)]
    impl GeographyApi for FakeGeography {
        async fn list_ufs(&self) -> ApiResult<Vec<String>> {
            if self.down {
                return Err(ApiError::Status { url: "estados".to_string(), status: 502 });
            }
            Ok(vec!["RJ".to_string(), "SP".to_string()])
        }

        async fn list_cities(&self, uf: &str) -> ApiResult<Vec<String>> {
            self.city_requests.borrow_mut().push(uf.to_string());
            self.cities
                .get(uf)
                .cloned()
                .ok_or_else(|| ApiError::Status { url: uf.to_string(), status: 404 })
        }
    }

    struct FixedLocator(Option<Position>);

    #[async_trait(?Send)]
    impl Locator for FixedLocator {
        async fn current_position(&self) -> ApiResult<Position> {
            self.0.ok_or_else(|| ApiError::Geolocation("User denied Geolocation".to_string()))
        }
    }

    struct PickedImage(Option<UploadedImage>);

    #[async_trait(?Send)]
    impl ImageSource for PickedImage {
        async fn read_image(&self) -> ApiResult<UploadedImage> {
            self.0.clone().ok_or_else(|| ApiError::File("NotReadableError".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        alerts: RefCell<Vec<String>>,
        routes: RefCell<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn navigate(&self, path: &str) {
            self.routes.borrow_mut().push(path.to_string());
        }
    }

    fn item(id: u32, title: &str) -> Item {
        Item {
            id,
            title: title.to_string(),
            image_url: format!("http://localhost:3333/uploads/{}.svg", id),
        }
    }

    fn geography() -> FakeGeography {
        let mut cities = HashMap::new();
        cities.insert("SP".to_string(), vec!["Campinas".to_string(), "Santos".to_string()]);
        cities.insert("RJ".to_string(), vec!["Niterói".to_string()]);
        FakeGeography { cities, ..Default::default() }
    }

    #[tokio::test]
    async fn test_create_point_end_to_end() {
        let api = FakeCollection {
            items: vec![item(3, "Baterias"), item(5, "Óleo de Cozinha")],
            ..Default::default()
        };
        let geo = geography();
        let navigator = RecordingNavigator::default();
        let mut form = PointForm::new();

        // Mount
        let initial = session::locate(&FixedLocator(Some(Position::new(10.0, 20.0)))).await.unwrap();
        assert_eq!(initial.as_array(), [10.0, 20.0]);
        let items = session::load_items(&api).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(session::load_ufs(&geo).await.unwrap(), vec!["RJ", "SP"]);
        assert_eq!(session::load_cities(&geo, &form.selected_uf).await.unwrap(), None);

        // User input
        form.set_field("name", "Recicla Campinas".to_string());
        form.select_uf("SP".to_string());
        let cities = session::load_cities(&geo, &form.selected_uf).await.unwrap().unwrap();
        assert_eq!(cities, vec!["Campinas", "Santos"]);
        form.select_city("Campinas".to_string());
        form.click_map(Position::new(11.0, 21.0));
        assert_eq!(form.selected_position.as_array(), [11.0, 21.0]);
        form.toggle_item(3);
        form.toggle_item(5);

        session::submit(&api, &navigator, &form).await.unwrap();

        let posted = api.posted.borrow();
        assert_eq!(posted.len(), 1);
        let payload = &posted[0];
        assert_eq!(payload.get("uf"), Some("SP"));
        assert_eq!(payload.get("city"), Some("Campinas"));
        assert_eq!(payload.get("latitude"), Some("11"));
        assert_eq!(payload.get("longitude"), Some("21"));
        assert_eq!(payload.get("itens"), Some("3,5"));
        assert_eq!(payload.get("name"), Some("Recicla Campinas"));
        assert!(payload.image().is_none());

        assert_eq!(*navigator.alerts.borrow(), vec![CREATED_MESSAGE]);
        assert_eq!(*navigator.routes.borrow(), vec![HOME_ROUTE]);
    }

    #[tokio::test]
    async fn test_unselected_uf_never_requests_cities() {
        let geo = geography();
        assert_eq!(session::load_cities(&geo, UNSELECTED).await.unwrap(), None);
        assert!(geo.city_requests.borrow().is_empty());

        session::load_cities(&geo, "RJ").await.unwrap();
        assert_eq!(session::load_cities(&geo, "0").await.unwrap(), None);
        assert_eq!(*geo.city_requests.borrow(), vec!["RJ"]);
    }

    #[tokio::test]
    async fn test_failed_submit_neither_alerts_nor_navigates() {
        let api = FakeCollection { fail: true, ..Default::default() };
        let navigator = RecordingNavigator::default();
        let form = PointForm::new();

        let result = session::submit(&api, &navigator, &form).await;

        assert!(matches!(result, Err(ApiError::Status { status: 500, .. })));
        assert!(navigator.alerts.borrow().is_empty());
        assert!(navigator.routes.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_failed_loaders_return_errors() {
        let api = FakeCollection { fail: true, ..Default::default() };
        assert!(session::load_items(&api).await.is_err());

        let geo = geography();
        assert!(session::load_cities(&geo, "AC").await.is_err());

        let denied = session::locate(&FixedLocator(None)).await;
        assert!(matches!(denied, Err(ApiError::Geolocation(_))));
    }

    #[tokio::test]
    async fn test_city_kept_after_uf_change() {
        let geo = geography();
        let mut form = PointForm::new();
        form.select_uf("SP".to_string());
        form.select_city("Campinas".to_string());

        form.select_uf("RJ".to_string());
        let cities = session::load_cities(&geo, &form.selected_uf).await.unwrap().unwrap();

        assert_eq!(cities, vec!["Niterói"]);
        assert_eq!(form.payload().get("city"), Some("Campinas"));
        assert_eq!(form.payload().get("uf"), Some("RJ"));
    }

    #[tokio::test]
    async fn test_failed_loaders_keep_previous_data() {
        let mut items = vec![item(1, "Lâmpadas")];
        let failing = FakeCollection { fail: true, ..Default::default() };
        assert!(!session::apply_loaded(&mut items, session::load_items(&failing).await, "items"));
        assert_eq!(items, vec![item(1, "Lâmpadas")]);

        let mut ufs = vec!["MG".to_string()];
        let down = FakeGeography { down: true, ..geography() };
        assert!(!session::apply_loaded(&mut ufs, session::load_ufs(&down).await, "UFs"));
        assert_eq!(ufs, vec!["MG"]);

        let geo = geography();
        let mut cities = Vec::new();
        let loaded = session::load_cities(&geo, "SP").await.transpose().unwrap();
        assert!(session::apply_loaded(&mut cities, loaded, "cities"));
        assert_eq!(cities, vec!["Campinas", "Santos"]);

        let loaded = session::load_cities(&geo, "AC").await.transpose().unwrap();
        assert!(!session::apply_loaded(&mut cities, loaded, "cities"));
        assert_eq!(cities, vec!["Campinas", "Santos"]);

        let mut center = Position::default();
        let denied = session::locate(&FixedLocator(None)).await;
        assert!(!session::apply_loaded(&mut center, denied, "position"));
        assert_eq!(center, Position::default());
    }

    #[tokio::test]
    async fn test_picked_image_is_read_at_submit() {
        let api = FakeCollection::default();
        let navigator = RecordingNavigator::default();
        let mut form = PointForm::new();
        form.set_field("name", "Recicla Santos".to_string());
        let picked = PickedImage(Some(UploadedImage {
            file_name: "fachada.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![137, 80, 78, 71],
        }));

        session::submit_with_image(&api, &navigator, form, Some(&picked)).await.unwrap();

        let posted = api.posted.borrow();
        let image = posted[0].image().unwrap();
        assert_eq!(image.file_name, "fachada.png");
        assert_eq!(image.bytes, vec![137, 80, 78, 71]);
        assert_eq!(*navigator.routes.borrow(), vec![HOME_ROUTE]);
    }

    #[tokio::test]
    async fn test_unreadable_image_posts_nothing() {
        let api = FakeCollection::default();
        let navigator = RecordingNavigator::default();

        let result = session::submit_with_image(
            &api,
            &navigator,
            PointForm::new(),
            Some(&PickedImage(None)),
        )
        .await;

        assert!(matches!(result, Err(ApiError::File(_))));
        assert!(api.posted.borrow().is_empty());
        assert!(navigator.alerts.borrow().is_empty());
        assert!(navigator.routes.borrow().is_empty());
    }
}
