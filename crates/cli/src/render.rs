//! Plain-text rendering of storefront views.

use std::io::{self, Write};

use khubsurat_storefront::views::{CartView, ProductCardView, WishlistView};

pub fn product_grid(
    out: &mut impl Write,
    title: &str,
    cards: &[ProductCardView],
) -> io::Result<()> {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))?;
    for card in cards {
        product_card(out, card)?;
    }
    Ok(())
}

fn product_card(out: &mut impl Write, card: &ProductCardView) -> io::Result<()> {
    let heart = if card.in_wishlist { "♥" } else { " " };
    let options = if card.needs_options { " (select size)" } else { "" };
    let stock = if card.in_stock { " - In Stock" } else { "" };
    writeln!(
        out,
        "{heart} [{id:>3}] {name} - {price} ({category}){options}{stock}",
        id = card.id,
        name = card.name,
        price = card.price,
        category = card.category,
    )
}

pub fn search_results(
    out: &mut impl Write,
    query: &str,
    cards: &[ProductCardView],
) -> io::Result<()> {
    if query.trim().is_empty() {
        return Ok(());
    }
    if cards.is_empty() {
        return writeln!(out, "No products found matching \"{query}\"");
    }
    for card in cards {
        product_card(out, card)?;
    }
    Ok(())
}

pub fn cart(out: &mut impl Write, view: &CartView) -> io::Result<()> {
    writeln!(out, "Shopping Cart ({})", view.item_count)?;
    if view.is_empty() {
        return writeln!(out, "  Your cart is empty");
    }

    for line in &view.lines {
        let mut options = Vec::new();
        if let Some(size) = &line.size {
            options.push(format!("Size: {size}"));
        }
        if let Some(color) = &line.color {
            options.push(format!("Color: {color}"));
        }
        let options = if options.is_empty() {
            String::new()
        } else {
            format!(" [{}]", options.join(", "))
        };

        writeln!(
            out,
            "  {index}. {name}{options} x{quantity} @ {price} = {line_price}",
            index = line.index,
            name = line.name,
            quantity = line.quantity,
            price = line.price,
            line_price = line.line_price,
        )?;
    }
    writeln!(out, "  Total: {}", view.total)
}

pub fn wishlist(out: &mut impl Write, view: &WishlistView) -> io::Result<()> {
    writeln!(out, "Wishlist ({})", view.count)?;
    if view.is_empty() {
        return writeln!(out, "  Your wishlist is empty");
    }
    for card in &view.items {
        writeln!(out, "  {} ({}) - {}", card.name, card.category, card.price)?;
    }
    Ok(())
}
