//! Keep only the named fields, in the named order

use crate::adif::{FieldOrder, Logfile};

pub fn select(log: &mut Logfile, fields: &[String]) {
    let order = FieldOrder::new(fields);
    for r in &mut log.records {
        r.retain(|f| order.contains(&f.name));
    }
    log.field_order = order;
    log::info!("selected {} fields from {} records", fields.len(), log.records.len());
}
