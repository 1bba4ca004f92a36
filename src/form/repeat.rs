//! Repeatable field blocks
//!
//! A slide with `add_more` treats its fields as a template. Instance `k`
//! (1-based) of the template gets `_k` appended to every field name and
//! ` k` appended to every non-static label.

use crate::models::FieldDef;

/// Build instance `index` of a field template.
///
/// With `mandatory_entry`, the second template field of instance 1 is made
/// required; later instances keep the template's own flags.
pub fn instance_fields(template: &[FieldDef], index: usize, mandatory_entry: bool) -> Vec<FieldDef> {
    template
        .iter()
        .enumerate()
        .map(|(position, field)| {
            let mut instance = field.clone();
            instance.fieldname = format!("{}_{}", field.fieldname, index);
            if !field.static_label && !field.label.is_empty() {
                instance.label = format!("{} {}", field.label, index);
            }
            if index == 1 && position == 1 && mandatory_entry {
                instance.reqd = true;
            }
            instance
        })
        .collect()
}

/// Split a field name into its template name and instance index.
///
/// `"customer_contact_2"` gives `("customer_contact", 2)`. Names without a
/// numeric suffix return `None`.
pub fn split_instance_name(fieldname: &str) -> Option<(&str, usize)> {
    let (base, suffix) = fieldname.rsplit_once('_')?;
    if base.is_empty() {
        return None;
    }
    suffix.parse::<usize>().ok().map(|index| (base, index))
}

/// Tracks how many instances of a template have been produced
#[derive(Debug, Clone)]
pub struct RepeatBlock {
    template: Vec<FieldDef>,
    count: usize,
    max_count: usize,
    mandatory_entry: bool,
}

impl RepeatBlock {
    /// Start a block; no instance has been produced yet
    pub fn new(template: Vec<FieldDef>, max_count: usize, mandatory_entry: bool) -> Self {
        Self {
            template,
            count: 0,
            max_count: max_count.max(1),
            mandatory_entry,
        }
    }

    /// Number of instances produced so far
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether another instance may be produced
    pub fn can_add(&self) -> bool {
        self.count < self.max_count
    }

    /// Produce the next instance, or `None` once `max_count` is reached
    pub fn next_instance(&mut self) -> Option<Vec<FieldDef>> {
        if !self.can_add() {
            return None;
        }
        self.count += 1;
        Some(instance_fields(&self.template, self.count, self.mandatory_entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template() -> Vec<FieldDef> {
        vec![
            FieldDef::new("customer_type", "Type").static_label(),
            FieldDef::new("customer", "Customer"),
            FieldDef::new("customer_contact", "Contact"),
        ]
    }

    #[test]
    fn test_first_instance_names_and_labels() {
        let fields = instance_fields(&template(), 1, false);
        let names: Vec<_> = fields.iter().map(|f| f.fieldname.as_str()).collect();
        assert_eq!(names, ["customer_type_1", "customer_1", "customer_contact_1"]);
        assert_eq!(fields[0].label, "Type");
        assert_eq!(fields[1].label, "Customer 1");
    }

    #[test]
    fn test_mandatory_entry_only_first_instance_second_field() {
        let first = instance_fields(&template(), 1, true);
        assert!(!first[0].reqd);
        assert!(first[1].reqd);
        assert!(!first[2].reqd);

        let second = instance_fields(&template(), 2, true);
        assert!(second.iter().all(|f| !f.reqd));
    }

    #[test]
    fn test_template_not_mutated() {
        let template = template();
        let _ = instance_fields(&template, 3, true);
        assert_eq!(template[1].fieldname, "customer");
        assert!(!template[1].reqd);
    }

    #[test]
    fn test_block_stops_at_max() {
        let mut block = RepeatBlock::new(template(), 3, false);
        let mut suffixes = Vec::new();
        while let Some(fields) = block.next_instance() {
            suffixes.push(fields[1].fieldname.clone());
        }
        assert_eq!(suffixes, ["customer_1", "customer_2", "customer_3"]);
        assert!(!block.can_add());
        assert_eq!(block.count(), 3);
    }

    #[test]
    fn test_split_instance_name() {
        assert_eq!(split_instance_name("customer_contact_2"), Some(("customer_contact", 2)));
        assert_eq!(split_instance_name("customer_10"), Some(("customer", 10)));
        assert_eq!(split_instance_name("customer"), None);
        assert_eq!(split_instance_name("customer_contact"), None);
        assert_eq!(split_instance_name("_1"), None);
    }
}
