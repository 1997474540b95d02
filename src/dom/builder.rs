use crate::adapters::dom_page::roles;
use crate::config::site::SiteConfig;
use crate::domain::model::Continent;
use crate::dom::{Document, NodeId};

/// Builds the destinations page markup from a site configuration.
///
/// Parts can be left out to get the pages that only carry some of the
/// interactive features (the home page has no search, for example).
pub struct PageBuilder<'a> {
    config: &'a SiteConfig,
    with_search: bool,
    with_menu: bool,
    with_carousel: bool,
}

impl<'a> PageBuilder<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            with_search: true,
            with_menu: true,
            with_carousel: true,
        }
    }

    pub fn search(mut self, enabled: bool) -> Self {
        self.with_search = enabled;
        self
    }

    pub fn menu(mut self, enabled: bool) -> Self {
        self.with_menu = enabled;
        self
    }

    pub fn carousel(mut self, enabled: bool) -> Self {
        self.with_carousel = enabled;
        self
    }

    pub fn build(&self) -> Document {
        let mut doc = Document::new(&self.config.page_url());
        let body = doc.body();

        doc.append_element(body, "a", |e| {
            e.add_class("skip-link");
            e.set_attr("href", "#main");
            e.set_text("Saltar al contenido principal");
        });

        self.build_header(&mut doc, body);

        let main = doc.append_element(body, "main", |e| {
            e.set_id("main");
            e.set_attr("tabindex", "-1");
        });
        if self.with_search {
            self.build_search(&mut doc, main);
        }
        self.build_cards(&mut doc, main);
        if self.with_carousel {
            self.build_carousel(&mut doc, main);
        }

        let site_name = self.config.site.name.clone();
        doc.append_element(body, "footer", |e| {
            e.add_class("footer");
            e.set_text(&format!("© {}", site_name));
        });
        doc
    }

    fn build_header(&self, doc: &mut Document, body: NodeId) {
        let header = doc.append_element(body, "header", |e| e.add_class("header"));
        let site_name = self.config.site.name.clone();
        doc.append_element(header, "a", |e| {
            e.add_class("logo");
            e.set_attr("href", "index.html");
            e.set_text(&site_name);
        });

        if self.with_menu {
            let toggle = doc.append_element(header, "button", |e| {
                e.add_class("menu-toggle");
                e.set_attr("aria-expanded", "false");
                e.set_attr("aria-label", "Abrir menú");
            });
            doc.append_element(toggle, "i", |e| e.set_text("☰"));
        }

        let nav = doc.append_element(header, "nav", |e| e.add_class("nav"));
        let list = doc.append_element(nav, "ul", |_| {});
        for link in &self.config.navigation {
            let item = doc.append_element(list, "li", |_| {});
            doc.append_element(item, "a", |e| {
                e.set_attr("href", &link.href);
                e.set_text(&link.label);
            });
        }
    }

    fn build_search(&self, doc: &mut Document, main: NodeId) {
        let section = doc.append_element(main, "section", |e| e.add_class("search-section"));
        doc.append_element(section, "input", |e| {
            e.set_id(roles::SEARCH_INPUT);
            e.set_attr("type", "search");
            e.set_attr("placeholder", "Buscar destinos...");
        });

        let select = doc.append_element(section, "select", |e| e.set_id(roles::CONTINENT_FILTER));
        doc.append_element(select, "option", |e| {
            e.set_attr("value", "");
            e.set_text("Todos los continentes");
        });
        for continent in Continent::ALL {
            doc.append_element(select, "option", |e| {
                e.set_attr("value", continent.as_str());
                e.set_text(continent.label());
            });
        }

        doc.append_element(section, "button", |e| {
            e.set_id(roles::CLEAR_BUTTON);
            e.set_text("Limpiar filtros");
        });
        doc.append_element(section, "div", |e| e.set_id(roles::RESULTS_COUNTER));
    }

    fn build_cards(&self, doc: &mut Document, main: NodeId) {
        let grid = doc.append_element(main, "div", |e| e.add_class(roles::CARD_GRID_CLASS));
        for destination in &self.config.destinations {
            // 標記一律使用英文代號
            let continent = Continent::from_label(&destination.continent)
                .map(|c| c.as_str().to_string())
                .unwrap_or_else(|_| destination.continent.clone());
            let card = doc.append_element(grid, "article", |e| {
                e.add_class("card");
                e.set_attr(roles::CARD_CONTINENT_ATTR, &continent);
            });
            if let Some(image) = &destination.image {
                doc.append_element(card, "img", |e| {
                    e.add_class("lazy");
                    e.set_attr("data-src", image);
                    e.set_attr("alt", &destination.name);
                });
            }
            doc.append_element(card, "h3", |e| e.set_text(&destination.name));
            doc.append_element(card, "p", |e| {
                e.add_class("country");
                e.set_text(&destination.country);
            });
            if let Some(description) = &destination.description {
                doc.append_element(card, "p", |e| e.set_text(description));
            }
        }
    }

    fn build_carousel(&self, doc: &mut Document, main: NodeId) {
        let swiper = doc.append_element(main, "section", |e| e.add_class("swiper"));
        let wrapper = doc.append_element(swiper, "div", |e| e.add_class("swiper-wrapper"));
        for destination in &self.config.destinations {
            doc.append_element(wrapper, "div", |e| {
                e.add_class("swiper-slide");
                e.set_text(&destination.name);
            });
        }
    }
}
