// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::sync::Arc;
use storefront::app::config::{self, BackendKind, CatalogLayout, Config};
use storefront::application::port::{Camera, CaptureTarget};
use storefront::application::view_model::{LoginViewModel, ProductListViewModel};
use storefront::i18n::fluent::I18n;
use storefront::infrastructure::InMemoryBackend;
use storefront::media;
use storefront::ui::{add_product, product_grid, product_list};
use tempfile::tempdir;

struct WritingCamera;

#[async_trait::async_trait]
impl Camera for WritingCamera {
    async fn capture(&self, target: &CaptureTarget) -> bool {
        std::fs::write(&target.file, b"jpeg").is_ok()
    }
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write initial config file");
    let loaded = config::load_from_path(&path).expect("Failed to load initial config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut spanish = loaded;
    spanish.general.language = Some("es".to_string());
    config::save_to_path(&spanish, &path).expect("Failed to write updated config file");
    let loaded = config::load_from_path(&path).expect("Failed to load updated config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "es");
    assert_eq!(i18n.tr_with_args("product-price", &[("price", "50")]), "PRECIO: $50");
}

#[test]
fn test_config_sections_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.backend.kind = BackendKind::Http;
    config.backend.base_url = "https://shop.test/api".into();
    config.catalog.layout = CatalogLayout::List;
    config.catalog.grid_columns = 9;
    config.capture.pictures_dir = Some(dir.path().join("photos"));

    config::save_to_path(&config, &path).expect("save");
    let loaded = config::load_from_path(&path).expect("load");

    assert_eq!(loaded, config);
    assert_eq!(loaded.catalog.columns().value(), 4);
}

#[tokio::test]
async fn test_add_flow_against_in_memory_backend() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let backend = Arc::new(InMemoryBackend::new());
    let view_model = ProductListViewModel::new(backend);
    let camera = WritingCamera;

    // Drive the screen the way the application root does.
    let mut screen = product_list::State::new();
    product_list::update(&mut screen, product_list::Message::AddRequested);
    for message in [
        add_product::Message::NameChanged("Shoe".into()),
        add_product::Message::DescriptionChanged("Red".into()),
        add_product::Message::PriceChanged("50".into()),
        add_product::Message::PermissionsResolved {
            granted: true,
            then_capture: false,
        },
    ] {
        product_list::update(&mut screen, product_list::Message::AddDialog(message));
    }

    let event = product_list::update(
        &mut screen,
        product_list::Message::AddDialog(add_product::Message::CaptureRequested),
    );
    assert!(matches!(event, product_list::Event::ProvisionCapture));

    let target = media::provision(&dir.path().join("pictures")).expect("provision");
    product_list::update(
        &mut screen,
        product_list::Message::AddDialog(add_product::Message::CaptureProvisioned(Ok(
            target.clone(),
        ))),
    );
    let success = camera.capture(&target).await;
    product_list::update(
        &mut screen,
        product_list::Message::AddDialog(add_product::Message::CaptureFinished {
            target: target.clone(),
            success,
        }),
    );

    let product_list::Event::Add(new_product) = product_list::update(
        &mut screen,
        product_list::Message::AddDialog(add_product::Message::Submit),
    ) else {
        panic!("expected an add event");
    };
    assert_eq!(new_product.image_file, target.file);
    assert!(!screen.has_dialog());

    let feed = view_model.feed();
    view_model.add_product(new_product).await.expect("add");
    let (snapshot, _) = feed.next().await.expect("snapshot");
    screen.set_products(snapshot);

    let products = screen.products().expect("loaded");
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Shoe");
    assert_eq!(product_grid::display_name(&products[0].name, 12), "SHOE");
}

#[tokio::test]
async fn test_rename_and_delete_flow() {
    let backend = Arc::new(InMemoryBackend::with_sample_catalog());
    let view_model = ProductListViewModel::new(backend);
    view_model.get_products().await.expect("fetch");

    let mut screen = product_list::State::new();
    screen.set_products(view_model.snapshot());
    let first = screen.products().expect("loaded")[0].clone();

    product_list::update(
        &mut screen,
        product_list::Message::Grid(product_grid::Message::Edit(first.clone())),
    );
    product_list::update(
        &mut screen,
        product_list::Message::EditDialog(storefront::ui::edit_product::Message::NameChanged(
            "Renamed".into(),
        )),
    );
    let product_list::Event::Update { id, name } = product_list::update(
        &mut screen,
        product_list::Message::EditDialog(storefront::ui::edit_product::Message::Submit),
    ) else {
        panic!("expected an update event");
    };
    view_model.update_product(id, name).await.expect("rename");
    assert!(view_model.snapshot().iter().any(|p| p.id == first.id && p.name == "Renamed"));

    let product_list::Event::Delete(id) = product_list::update(
        &mut screen,
        product_list::Message::Grid(product_grid::Message::Delete(first.id)),
    ) else {
        panic!("expected a delete event");
    };
    view_model.delete_product(id).await.expect("delete");
    assert!(view_model.snapshot().iter().all(|p| p.id != first.id));
    assert!(!screen.has_dialog());
}

#[tokio::test]
async fn test_login_against_single_account() {
    let backend = Arc::new(InMemoryBackend::new().with_account("alice@shop.test", "secret"));
    let view_model = LoginViewModel::new(backend);

    assert!(view_model.login("alice@shop.test".into(), "secret".into()).await);
    assert!(!view_model.login("alice@shop.test".into(), "".into()).await);
}

#[test]
fn test_capture_names_live_under_pictures_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let pictures = dir.path().join("pictures");

    let target = media::provision(&pictures).expect("provision");

    assert!(target.file.starts_with(&pictures));
    assert!(pictures.is_dir());
    assert!(target.uri.starts_with("file://"));
    let name = target.file.file_name().and_then(|n| n.to_str()).map(PathBuf::from);
    assert!(name.is_some_and(|n| n.extension().is_some_and(|e| e == "jpg")));
}
