// SPDX-License-Identifier: MPL-2.0
//! Product cards laid out as a grid or a list.
//!
//! Rendering only: the grid holds no state and reports edit and delete
//! intents upward.

use crate::app::config::CatalogLayout;
use crate::domain::catalog::GridColumns;
use crate::domain::{Product, ProductId};
use crate::i18n::fluent::I18n;
use crate::media::image_cache::{is_remote, RemoteImageCache};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::image::Handle;
use iced::widget::{button, image, scrollable, text, Column, Container, Row, Space, Text};
use iced::{alignment, ContentFit, Element, Length};
use std::path::PathBuf;

/// Characters of a product name shown on a one-column row.
const NAME_CHARS_FULL_WIDTH: usize = 48;

/// Fewest name characters shown whatever the column count.
const NAME_CHARS_MIN: usize = 12;

/// Width of the photo on a list row.
const LIST_IMAGE_WIDTH: f32 = 120.0;

#[derive(Debug, Clone)]
pub enum Message {
    Edit(Product),
    Delete(ProductId),
}

/// Where a card's photo comes from.
#[derive(Debug, Clone)]
pub enum ImageSource {
    Remote(Handle),
    Local(PathBuf),
    Placeholder,
}

/// Resolves the photo of a product. Remote photos not downloaded yet show
/// the placeholder.
#[must_use]
pub fn image_source(image: &str, cache: &RemoteImageCache) -> ImageSource {
    if image.is_empty() {
        ImageSource::Placeholder
    } else if is_remote(image) {
        cache
            .peek(image)
            .map_or(ImageSource::Placeholder, |handle| ImageSource::Remote(handle.clone()))
    } else {
        ImageSource::Local(PathBuf::from(image))
    }
}

/// Uppercases `name` and cuts it to `max_chars`, ending with an ellipsis
/// when cut.
#[must_use]
pub fn display_name(name: &str, max_chars: usize) -> String {
    let upper = name.to_uppercase();
    if upper.chars().count() <= max_chars {
        return upper;
    }
    let mut cut: String = upper.chars().take(max_chars.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

fn name_budget(columns: GridColumns) -> usize {
    (NAME_CHARS_FULL_WIDTH / columns.value()).max(NAME_CHARS_MIN)
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub products: &'a [Product],
    pub layout: CatalogLayout,
    pub columns: GridColumns,
    pub images: &'a RemoteImageCache,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match ctx.layout {
        CatalogLayout::Grid => grid(&ctx),
        CatalogLayout::List => list(&ctx),
    };

    scrollable(Container::new(content).padding(spacing::MD))
        .height(Length::Fill)
        .into()
}

fn grid<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let columns = ctx.columns.value();
    let budget = name_budget(ctx.columns);

    let rows = ctx.products.chunks(columns).map(|chunk| -> Element<'a, Message> {
        let mut row = Row::new().spacing(spacing::MD);
        for product in chunk {
            row = row.push(
                Container::new(grid_card(ctx, product, budget)).width(Length::FillPortion(1)),
            );
        }
        // Keep the cards of a short last row as wide as the others.
        for _ in chunk.len()..columns {
            row = row.push(Space::new().width(Length::FillPortion(1)));
        }
        row.into()
    });

    Column::with_children(rows).spacing(spacing::MD).into()
}

fn list<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let rows = ctx
        .products
        .iter()
        .map(|product| list_row(ctx, product));
    Column::with_children(rows).spacing(spacing::SM).into()
}

fn grid_card<'a>(ctx: &ViewContext<'a>, product: &'a Product, budget: usize) -> Element<'a, Message> {
    let photo = photo(
        image_source(&product.image, ctx.images),
        Length::Fill,
        Length::Fixed(sizing::CARD_IMAGE_HEIGHT),
    );

    let body = Column::new()
        .spacing(spacing::XS)
        .push(photo)
        .push(price(ctx.i18n, product))
        .push(name(product, budget))
        .push(actions(ctx.i18n, product));

    Container::new(body)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn list_row<'a>(ctx: &ViewContext<'a>, product: &'a Product) -> Element<'a, Message> {
    let photo = photo(
        image_source(&product.image, ctx.images),
        Length::Fixed(LIST_IMAGE_WIDTH),
        Length::Fixed(LIST_IMAGE_WIDTH),
    );

    let details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(name(product, NAME_CHARS_FULL_WIDTH))
        .push(Text::new(&product.description).size(typography::BODY_SM))
        .push(price(ctx.i18n, product));

    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(photo)
        .push(details)
        .push(actions(ctx.i18n, product));

    Container::new(row)
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn photo<'a>(source: ImageSource, width: Length, height: Length) -> Element<'a, Message> {
    let handle = match source {
        ImageSource::Remote(handle) => Some(handle),
        ImageSource::Local(path) => Some(Handle::from_path(path)),
        ImageSource::Placeholder => None,
    };

    match handle {
        Some(handle) => image(handle)
            .content_fit(ContentFit::Cover)
            .width(width)
            .height(height)
            .into(),
        None => Container::new(Space::new())
            .width(width)
            .height(height)
            .style(styles::container::image_placeholder)
            .into(),
    }
}

fn price<'a>(i18n: &I18n, product: &Product) -> Element<'a, Message> {
    Text::new(i18n.tr_with_args(
        "product-price",
        &[("price", product.price.to_string().as_str())],
    ))
    .size(typography::BODY)
    .into()
}

fn name<'a>(product: &Product, budget: usize) -> Element<'a, Message> {
    Text::new(display_name(&product.name, budget))
        .size(typography::TITLE_SM)
        .wrapping(text::Wrapping::None)
        .into()
}

fn actions<'a>(i18n: &I18n, product: &'a Product) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .push(
            button(text(i18n.tr("product-edit")).size(typography::BODY_SM))
                .on_press(Message::Edit(product.clone()))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::secondary),
        )
        .push(
            button(text(i18n.tr("product-delete")).size(typography::BODY_SM))
                .on_press(Message::Delete(product.id))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::danger),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_uppercased_whole() {
        assert_eq!(display_name("Samba og", 20), "SAMBA OG");
    }

    #[test]
    fn long_names_end_with_ellipsis() {
        let shown = display_name("Ultraboost Light running shoe", 10);
        assert_eq!(shown, "ULTRABOOS…");
        assert_eq!(shown.chars().count(), 10);
    }

    #[test]
    fn name_budget_shrinks_with_columns() {
        assert_eq!(name_budget(GridColumns::new(1)), 48);
        assert_eq!(name_budget(GridColumns::new(2)), 24);
        assert_eq!(name_budget(GridColumns::new(4)), NAME_CHARS_MIN);
    }

    #[test]
    fn image_sources_are_resolved() {
        let mut cache = RemoteImageCache::default();
        let url = "https://cdn.shop.test/samba.jpg";

        assert!(matches!(image_source("", &cache), ImageSource::Placeholder));
        assert!(matches!(image_source(url, &cache), ImageSource::Placeholder));
        assert!(matches!(
            image_source("/data/pictures/IMG_20240101_120000.jpg", &cache),
            ImageSource::Local(_)
        ));

        cache.insert(url.to_string(), vec![1, 2, 3]);
        assert!(matches!(image_source(url, &cache), ImageSource::Remote(_)));
    }
}
