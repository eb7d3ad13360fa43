//! Keyed render models for list items.

use serde::Serialize;

use crate::domain::Entity;
use crate::domain::types::EntityId;

/// One summary card, keyed by the entity id.
#[derive(Debug, Serialize)]
pub struct Card<'a, T> {
    pub key: EntityId,
    pub item: &'a T,
    pub labels: Vec<Label<'a>>,
}

/// Inner list item. Labels carry no id, so they are keyed by position.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Label<'a> {
    pub key: usize,
    pub text: &'a str,
}

#[must_use]
pub fn cards<T: Entity>(items: &[T]) -> Vec<Card<'_, T>> {
    items
        .iter()
        .map(|item| Card {
            key: item.id(),
            item,
            labels: labels(item.labels()),
        })
        .collect()
}

#[must_use]
pub fn labels(values: &[String]) -> Vec<Label<'_>> {
    values
        .iter()
        .enumerate()
        .map(|(key, text)| Label { key, text })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::person::Person;

    #[test]
    fn one_card_per_entity_keyed_by_id() {
        let people = vec![
            Person {
                id: EntityId::new(2).expect("valid id"),
                name: "Bob".to_string(),
                movies: vec!["A".to_string(), "B".to_string()],
            },
            Person {
                id: EntityId::new(9).expect("valid id"),
                name: "Eve".to_string(),
                movies: vec![],
            },
        ];

        let cards = cards(&people);

        let keys: Vec<_> = cards.iter().map(|card| card.key.get()).collect();
        assert_eq!(keys, [2, 9]);
        assert_eq!(
            cards[0].labels,
            [Label { key: 0, text: "A" }, Label { key: 1, text: "B" }]
        );
        assert!(cards[1].labels.is_empty());
    }
}
