use crate::adapters::dom_page::{install_search_styles, roles};
use crate::config::site::SiteConfig;
use crate::core::announcer::Announcer;
use crate::core::content::{ContentLoader, LoadedContent};
use crate::core::notify::Notifier;
use crate::core::search::SearchController;
use crate::dom::{Document, NodeId};
use crate::domain::messages::NotificationKind;
use crate::domain::ports::{lock_page, ContentSource, SharedPage};
use crate::ui::accessibility::{self, SkipLink};
use crate::ui::lazy_images::{IntersectionSupport, LazyImages};
use crate::ui::menu::MenuToggle;
use crate::ui::scroll::{self, ScrollEffects};
use crate::ui::{Carousels, Key};
use crate::utils::debounce::Debouncer;
use crate::utils::throttle::Throttler;

/// Browser events the site reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    Input(NodeId),
    Change(NodeId),
    Click(NodeId),
    KeyDown { target: Option<NodeId>, key: Key },
    MouseDown,
    Scroll(f64),
    Resize(u32),
    Intersect(Vec<NodeId>),
}

/// Every interactive feature of one loaded page.
///
/// Features whose elements are missing from the page are simply not
/// attached. Event handlers take the page lock themselves, so `dispatch`
/// must not be called while holding it.
pub struct Site {
    page: SharedPage<Document>,
    announcer: Announcer<Document>,
    notifier: Notifier<Document>,
    search: Option<SearchController<Document>>,
    menu: Option<MenuToggle>,
    scroll: ScrollEffects,
    skip_link: Option<SkipLink>,
    lazy_images: LazyImages,
    body_scroll: Throttler<()>,
    resize: Debouncer<()>,
}

impl Site {
    pub fn init(page: SharedPage<Document>, config: &SiteConfig) -> Self {
        let timing = &config.timing;

        let (menu, scroll, skip_link, lazy_images, carousels) = {
            let mut doc = lock_page(&page);
            accessibility::ensure_live_region(&mut doc);
            let highlighted = accessibility::highlight_current_page(&mut doc);
            tracing::debug!("Highlighted {} navigation link(s)", highlighted);
            (
                MenuToggle::attach(&doc),
                ScrollEffects::attach(&doc),
                SkipLink::attach(&doc),
                LazyImages::attach(&mut doc, IntersectionSupport::Available),
                Carousels::attach(&mut doc),
            )
        };

        let announcer = Announcer::new(page.clone(), timing.announcement_clear());
        let notifier = Notifier::new(page.clone(), announcer.clone(), timing.notification_dismiss());

        let search = SearchController::attach(page.clone(), announcer.clone(), timing.search_debounce());
        if search.is_some() {
            install_search_styles(&mut lock_page(&page));
        }

        let scrolled_page = page.clone();
        let body_scroll = Throttler::new(timing.scroll_throttle(), move |()| {
            scroll::update_body_scrolled(&mut lock_page(&scrolled_page));
        });

        let resized_page = page.clone();
        let resize = Debouncer::new(timing.resize_debounce(), move |()| {
            if let Some(carousels) = &carousels {
                carousels.layout(&mut lock_page(&resized_page));
            }
        });

        tracing::info!(
            "🌍 {} - page ready (search: {}, menu: {})",
            config.site.name,
            search.is_some(),
            menu.is_some()
        );

        Self {
            page,
            announcer,
            notifier,
            search,
            menu,
            scroll,
            skip_link,
            lazy_images,
            body_scroll,
            resize,
        }
    }

    pub fn page(&self) -> &SharedPage<Document> {
        &self.page
    }

    pub fn search(&self) -> Option<&SearchController<Document>> {
        self.search.as_ref()
    }

    pub fn menu(&self) -> Option<&MenuToggle> {
        self.menu.as_ref()
    }

    pub fn announce(&self, message: &str) {
        self.announcer.announce(message);
    }

    pub fn notify(&self, message: &str, kind: NotificationKind) {
        self.notifier.show(message, kind);
    }

    /// Fetches optional JSON content; failures surface as an error notification.
    pub async fn load_dynamic_content<S>(&self, source: &S, url: &str) -> Option<LoadedContent>
    where
        S: ContentSource + ?Sized,
    {
        ContentLoader::new(self.notifier.clone()).load(source, url).await
    }

    pub fn dispatch(&mut self, event: PageEvent) {
        match event {
            PageEvent::Input(target) => {
                if let Some(search) = &self.search {
                    if self.target_within(target, roles::SEARCH_INPUT) {
                        search.on_search_input();
                    }
                }
            }
            PageEvent::Change(target) => {
                if let Some(search) = &self.search {
                    if self.target_within(target, roles::CONTINENT_FILTER) {
                        search.on_continent_change();
                    }
                }
            }
            PageEvent::Click(target) => self.on_click(target),
            PageEvent::KeyDown { target, key } => {
                if key == Key::Escape {
                    if let (Some(search), Some(target)) = (&self.search, target) {
                        if self.target_within(target, roles::SEARCH_INPUT) {
                            search.on_search_escape();
                        }
                    }
                }
                let mut doc = lock_page(&self.page);
                accessibility::handle_keydown(&mut doc, &key, self.menu.as_ref());
            }
            PageEvent::MouseDown => accessibility::handle_mousedown(&mut lock_page(&self.page)),
            PageEvent::Scroll(y) => {
                {
                    let mut doc = lock_page(&self.page);
                    doc.set_scroll_y(y);
                    self.scroll.on_scroll(&mut doc);
                }
                self.body_scroll.call(());
            }
            PageEvent::Resize(width) => {
                lock_page(&self.page).set_viewport_width(width);
                self.resize.call(());
            }
            PageEvent::Intersect(entries) => {
                let mut doc = lock_page(&self.page);
                self.lazy_images.on_intersect(&mut doc, &entries);
            }
        }
    }

    fn on_click(&self, target: NodeId) {
        let clear = self.target_within(target, roles::CLEAR_BUTTON);
        let placeholder_clear = self.target_within(target, roles::NO_RESULTS_CLEAR);

        {
            let mut doc = lock_page(&self.page);
            if let Some(menu) = &self.menu {
                menu.handle_click(&mut doc, target);
            }
            let skipped = self
                .skip_link
                .is_some_and(|skip| skip.handle_click(&mut doc, target));
            if !skipped {
                scroll::handle_anchor_click(&mut doc, target);
            }
        }

        if let Some(search) = &self.search {
            if clear {
                search.on_clear_filters();
            } else if placeholder_clear {
                search.on_placeholder_clear();
            }
        }
    }

    /// Whether `target` is the element with `id` or sits inside it.
    fn target_within(&self, target: NodeId, id: &str) -> bool {
        let doc = lock_page(&self.page);
        doc.get_element_by_id(id)
            .is_some_and(|node| doc.contains(node, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::builder::PageBuilder;
    use crate::domain::ports::share;

    fn site() -> Site {
        let config = SiteConfig::default();
        Site::init(share(PageBuilder::new(&config).build()), &config)
    }

    #[test]
    fn test_init_attaches_page_features() {
        let site = site();
        let doc = lock_page(site.page());

        assert!(site.search().is_some());
        assert!(site.menu().is_some());
        assert!(doc.get_element_by_id(roles::LIVE_REGION).is_some());
        assert!(doc.get_element_by_id(roles::SEARCH_STYLES).is_some());

        let counter = doc.get_element_by_id(roles::RESULTS_COUNTER).unwrap();
        assert_eq!(
            doc.element(counter).unwrap().own_text(),
            "Mostrando los 7 destinos disponibles"
        );
    }

    #[test]
    fn test_page_without_search_skips_styles() {
        let config = SiteConfig::default();
        let page = share(PageBuilder::new(&config).search(false).build());
        let site = Site::init(page, &config);

        assert!(site.search().is_none());
        assert!(lock_page(site.page()).get_element_by_id(roles::SEARCH_STYLES).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_continent_change_filters_immediately() {
        let mut site = site();
        let select = {
            let mut doc = lock_page(site.page());
            let select = doc.get_element_by_id(roles::CONTINENT_FILTER).unwrap();
            doc.element_mut(select).unwrap().set_value("asia");
            select
        };

        site.dispatch(PageEvent::Change(select));

        let doc = lock_page(site.page());
        let shown = doc
            .elements_with_attr(roles::CARD_CONTINENT_ATTR)
            .into_iter()
            .filter(|&card| doc.element(card).unwrap().is_displayed())
            .count();
        assert_eq!(shown, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_events_on_other_elements_are_ignored() {
        let mut site = site();
        let footer = lock_page(site.page()).elements_by_tag("footer")[0];

        site.dispatch(PageEvent::Input(footer));
        assert!(!site.search().unwrap().has_pending_input());
    }
}
