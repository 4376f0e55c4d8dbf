use yew::prelude::*;

use crate::config::NavConfig;
use crate::web;

#[derive(Clone, PartialEq)]
pub struct CardLink {
    pub label: AttrValue,
    pub href: AttrValue,
}

#[derive(Clone, PartialEq)]
pub struct CardEntry {
    pub label: AttrValue,
    /// Selector of the section the card scrolls to, e.g. `#products`.
    pub target: Option<AttrValue>,
    pub links: Vec<CardLink>,
}

#[derive(Properties, PartialEq)]
pub struct CardNavProps {
    pub cards: Vec<CardEntry>,
    /// Rendered in the theme toggle slot below the cards.
    #[prop_or_default]
    pub children: Children,
}

fn render_card(card: &CardEntry) -> Html {
    html! {
        <div class="nav-card" data-href={card.target.clone()} aria-label={card.label.clone()}>
            <div class="nav-card-label">{ card.label.clone() }</div>
            <div class="nav-card-links">
                { for card.links.iter().map(|link| html! {
                    <a class="nav-card-link" href={link.href.clone()}>{ link.label.clone() }</a>
                }) }
            </div>
        </div>
    }
}

/// The controller snapshots card targets and link elements when it mounts,
/// so any change to the card set has to remount it.
fn mount_deps(props: &CardNavProps) -> Vec<CardEntry> {
    props.cards.clone()
}

/// Card nav markup with the controller mounted on top of it.
///
/// Element ids follow the default selectors in [`NavConfig`].
#[function_component]
pub fn CardNav(props: &CardNavProps) -> Html {
    {
        use_effect_with_deps(
            move |_| {
                let handle = match web::mount(&NavConfig::default()) {
                    Ok(handle) => Some(handle),
                    Err(e) => {
                        log::warn!("Card nav not mounted: {}", e);
                        None
                    }
                };
                move || drop(handle)
            },
            mount_deps(props),
        );
    }

    let theme_slot = if props.children.is_empty() {
        html! {}
    } else {
        html! {
            <div class="nav-theme-toggle-wrapper">{ props.children.clone() }</div>
        }
    };

    html! {
        <>
            <div id="cardNavBackdrop" class="card-nav-backdrop"></div>
            <div id="cardNav" class="card-nav-container">
                <nav class="card-nav">
                    <div class="card-nav-top">
                        <div
                            id="cardNavHamburger"
                            class="hamburger-menu"
                            role="button"
                            tabindex="0"
                            aria-label="Toggle menu"
                        >
                            <div class="hamburger-line"></div>
                            <div class="hamburger-line"></div>
                        </div>
                    </div>
                    <div class="card-nav-content">
                        { for props.cards.iter().map(render_card) }
                        { theme_slot }
                    </div>
                </nav>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(label: &'static str, target: &'static str, links: &[&'static str]) -> CardEntry {
        CardEntry {
            label: AttrValue::from(label),
            target: Some(AttrValue::from(target)),
            links: links
                .iter()
                .map(|href| CardLink { label: AttrValue::from("Go"), href: AttrValue::from(*href) })
                .collect(),
        }
    }

    fn props(cards: Vec<CardEntry>) -> CardNavProps {
        CardNavProps { cards, children: Children::default() }
    }

    #[test]
    fn retargeting_a_card_remounts() {
        let before = props(vec![card("A", "#a", &[]), card("B", "#b", &[])]);
        let after = props(vec![card("A", "#x", &[]), card("B", "#b", &[])]);

        assert_eq!(before.cards.len(), after.cards.len());
        assert!(mount_deps(&before) != mount_deps(&after));
    }

    #[test]
    fn adding_a_link_remounts() {
        let before = props(vec![card("A", "#a", &[])]);
        let after = props(vec![card("A", "#a", &["/shop"])]);

        assert!(mount_deps(&before) != mount_deps(&after));
    }

    #[test]
    fn identical_cards_keep_the_mount() {
        let before = props(vec![card("A", "#a", &["/shop"])]);
        let after = props(vec![card("A", "#a", &["/shop"])]);

        assert!(mount_deps(&before) == mount_deps(&after));
    }
}
