use crate::core::catalog::CatalogState;
use crate::core::counter::{Button, ItemCounter};
use crate::core::SaleItem;
use crate::view::Element;

const NORMAL_CARD_STYLE: &str =
    "border: 1px solid; padding: 15px; border-radius: 10px; background-color: mistyrose";
const FEATURED_CARD_STYLE: &str = "background-color: salmon; color: white; \
     border: 5px solid black; padding: 15px; border-radius: 15px; font-weight: bold";

fn button_style(counter: &ItemCounter, button: Button) -> String {
    let color = if counter.is_hovering(button) {
        "grey"
    } else {
        "silver"
    };
    format!("background-color: {}", color)
}

pub fn render_sale_item(item: &SaleItem, counter: &ItemCounter) -> Element {
    let mut decrease = Element::new("button")
        .class("inline")
        .attr("data-action", "decrease")
        .attr("style", button_style(counter, Button::Decrease));
    if !counter.can_decrement() {
        decrease = decrease.attr("disabled", "disabled");
    }

    let increase = Element::new("button")
        .class("inline")
        .attr("data-action", "increase")
        .attr("style", button_style(counter, Button::Increase));

    Element::new("div")
        .class(if item.featured { "sale-item featured" } else { "sale-item" })
        .attr(
            "style",
            if item.featured {
                FEATURED_CARD_STYLE
            } else {
                NORMAL_CARD_STYLE
            },
        )
        .child(Element::new("h2").text(item.name.clone()))
        .child(Element::new("p").text(item.description.clone()))
        .child(Element::new("p").text(item.price.to_string()))
        .child(
            Element::new("div")
                .class("controls")
                .child(decrease.text("-"))
                .child(
                    Element::new("p")
                        .class("inline quantity")
                        .text(counter.quantity().to_string()),
                )
                .child(increase.text("+")),
        )
}

pub fn render_catalog(state: &CatalogState) -> Element {
    Element::new("div")
        .child(Element::new("h1").text("Badger Mart"))
        .child(
            Element::new("p")
                .id("featured-banner")
                .text(state.featured_banner()),
        )
        .child(
            Element::new("div").class("container").child(
                Element::new("div")
                    .class("row")
                    .children(state.entries().map(|(item, counter)| {
                        Element::new("div")
                            .class("col-12 col-md-6 col-lg-4 col-xl-3")
                            .attr("data-key", item.name.clone())
                            .child(render_sale_item(item, counter))
                    })),
            ),
        )
}
