use std::time::{Duration, Instant};
use viaje_mundo::adapters::roles;
use viaje_mundo::config::site::DestinationConfig;
use viaje_mundo::dom::NodeId;
use viaje_mundo::domain::ports::{lock_page, share};
use viaje_mundo::{Key, PageBuilder, PageEvent, Site, SiteConfig};

fn destination(name: &str, country: &str, continent: &str) -> DestinationConfig {
    DestinationConfig {
        name: name.to_string(),
        country: country.to_string(),
        continent: continent.to_string(),
        description: None,
        image: None,
    }
}

fn two_city_site() -> Site {
    let mut config = SiteConfig::default();
    config.destinations = vec![
        destination("Paris", "France", "europe"),
        destination("Tokyo", "Japan", "asia"),
    ];
    Site::init(share(PageBuilder::new(&config).build()), &config)
}

fn set_value(site: &Site, id: &str, value: &str) -> NodeId {
    let mut doc = lock_page(site.page());
    let node = doc.get_element_by_id(id).unwrap();
    doc.element_mut(node).unwrap().set_value(value);
    node
}

fn text_of(site: &Site, id: &str) -> String {
    let doc = lock_page(site.page());
    let node = doc.get_element_by_id(id).unwrap();
    doc.text_content(node)
}

fn visible_names(site: &Site) -> Vec<String> {
    let doc = lock_page(site.page());
    doc.elements_with_attr(roles::CARD_CONTINENT_ATTR)
        .into_iter()
        .filter(|&card| doc.element(card).unwrap().is_displayed())
        .map(|card| {
            let heading = doc.descendant_by_tag(card, "h3").unwrap();
            doc.text_content(heading)
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_typing_filters_once_input_pauses() {
    let mut site = two_city_site();
    assert_eq!(
        text_of(&site, roles::RESULTS_COUNTER),
        "Mostrando los 2 destinos disponibles"
    );

    let input = set_value(&site, roles::SEARCH_INPUT, "pa");
    site.dispatch(PageEvent::Input(input));
    tokio::time::sleep(Duration::from_millis(100)).await;
    set_value(&site, roles::SEARCH_INPUT, "par");
    site.dispatch(PageEvent::Input(input));

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(visible_names(&site).len(), 2);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(visible_names(&site), vec!["Paris"]);
    assert_eq!(text_of(&site, roles::RESULTS_COUNTER), "Mostrando 1 de 2 destinos");
    assert_eq!(text_of(&site, roles::LIVE_REGION), "Se encontró 1 destino");

    tokio::time::sleep(Duration::from_millis(1001)).await;
    assert_eq!(text_of(&site, roles::LIVE_REGION), "");
}

#[tokio::test(start_paused = true)]
async fn test_no_matches_shows_placeholder_after_grid() {
    let mut site = two_city_site();
    let select = set_value(&site, roles::CONTINENT_FILTER, "oceania");
    site.dispatch(PageEvent::Change(select));

    assert!(visible_names(&site).is_empty());
    assert_eq!(
        text_of(&site, roles::RESULTS_COUNTER),
        "No hay destinos que coincidan con los filtros"
    );
    assert_eq!(
        text_of(&site, roles::LIVE_REGION),
        "No se encontraron destinos que coincidan con tu búsqueda"
    );

    let doc = lock_page(site.page());
    let grid = doc.first_by_class(roles::CARD_GRID_CLASS).unwrap();
    let placeholder = doc.get_element_by_id(roles::NO_RESULTS).unwrap();
    assert_eq!(doc.next_sibling(grid), Some(placeholder));
    assert!(doc.element(placeholder).unwrap().is_displayed());
}

#[tokio::test(start_paused = true)]
async fn test_placeholder_button_resets_everything() {
    let mut site = two_city_site();
    let input = set_value(&site, roles::SEARCH_INPUT, "zzz");
    site.dispatch(PageEvent::Input(input));
    tokio::time::sleep(Duration::from_millis(301)).await;
    assert!(visible_names(&site).is_empty());

    let button = lock_page(site.page())
        .get_element_by_id(roles::NO_RESULTS_CLEAR)
        .unwrap();
    site.dispatch(PageEvent::Click(button));

    assert_eq!(visible_names(&site), vec!["Paris", "Tokyo"]);
    let doc = lock_page(site.page());
    let placeholder = doc.get_element_by_id(roles::NO_RESULTS).unwrap();
    assert!(!doc.element(placeholder).unwrap().is_displayed());
    assert_eq!(doc.active_element(), Some(input));
    assert_eq!(doc.element(input).unwrap().value(), "");
}

#[tokio::test(start_paused = true)]
async fn test_clear_button_drops_pending_input() {
    let mut site = two_city_site();
    let input = set_value(&site, roles::SEARCH_INPUT, "tok");
    site.dispatch(PageEvent::Input(input));

    let clear = lock_page(site.page())
        .get_element_by_id(roles::CLEAR_BUTTON)
        .unwrap();
    site.dispatch(PageEvent::Click(clear));
    assert!(!site.search().unwrap().has_pending_input());

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert_eq!(visible_names(&site), vec!["Paris", "Tokyo"]);
    assert_eq!(
        text_of(&site, roles::RESULTS_COUNTER),
        "Mostrando los 2 destinos disponibles"
    );
}

#[tokio::test(start_paused = true)]
async fn test_escape_in_search_box_resets_and_blurs() {
    let mut site = two_city_site();
    let input = set_value(&site, roles::SEARCH_INPUT, "tokyo");
    let select = {
        let mut doc = lock_page(site.page());
        doc.focus(input);
        doc.get_element_by_id(roles::CONTINENT_FILTER).unwrap()
    };
    site.dispatch(PageEvent::Change(select));
    assert_eq!(visible_names(&site), vec!["Tokyo"]);

    site.dispatch(PageEvent::KeyDown {
        target: Some(input),
        key: Key::Escape,
    });

    assert_eq!(visible_names(&site).len(), 2);
    assert_eq!(lock_page(site.page()).active_element(), None);
}

#[tokio::test(start_paused = true)]
async fn test_revealed_cards_get_entrance_animation() {
    let mut site = two_city_site();
    let select = set_value(&site, roles::CONTINENT_FILTER, "asia");
    site.dispatch(PageEvent::Change(select));
    set_value(&site, roles::CONTINENT_FILTER, "any");
    site.dispatch(PageEvent::Change(select));

    let doc = lock_page(site.page());
    let cards = doc.elements_with_attr(roles::CARD_CONTINENT_ATTR);
    assert_eq!(
        doc.element(cards[0]).unwrap().style("animation"),
        Some("fadeIn 0.3s ease-in")
    );
    assert_eq!(doc.element(cards[1]).unwrap().style("animation"), None);
}

fn asia_grid_site(cards: usize) -> Site {
    let mut config = SiteConfig::default();
    config.destinations = (0..cards)
        .map(|i| destination(&format!("Ciudad {}", i), "Japón", "asia"))
        .collect();
    Site::init(share(PageBuilder::new(&config).build()), &config)
}

/// Fastest of a few continent switches over a grid of `cards` cards.
fn fastest_continent_pass(cards: usize) -> Duration {
    let mut site = asia_grid_site(cards);
    let select = lock_page(site.page())
        .get_element_by_id(roles::CONTINENT_FILTER)
        .unwrap();

    (0..3)
        .map(|round| {
            let continent = if round % 2 == 0 { "europe" } else { "asia" };
            set_value(&site, roles::CONTINENT_FILTER, continent);
            let started = Instant::now();
            site.dispatch(PageEvent::Change(select));
            started.elapsed()
        })
        .min()
        .unwrap()
}

#[tokio::test]
async fn test_filter_pass_grows_linearly_with_grid_size() {
    let small = fastest_continent_pass(500);
    let large = fastest_continent_pass(4000);

    // 8x the cards: linear work stays well under 64x
    let ratio = large.as_secs_f64() / small.as_secs_f64().max(1e-6);
    assert!(
        ratio < 24.0,
        "pass over 4000 cards took {:?}, over 500 cards {:?}",
        large,
        small
    );

    let mut site = asia_grid_site(4000);
    let select = set_value(&site, roles::CONTINENT_FILTER, "europe");
    site.dispatch(PageEvent::Change(select));
    assert!(visible_names(&site).is_empty());
    assert_eq!(
        text_of(&site, roles::RESULTS_COUNTER),
        "No hay destinos que coincidan con los filtros"
    );
}
