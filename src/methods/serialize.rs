use mongodb::bson::{Bson, Document};

/// External form of a stored document: the store-assigned `_id` is renamed
/// to `id` and stringified, and any other ObjectId-valued field is
/// stringified in place. Everything else passes through untouched, so a
/// document that was already serialized comes back unchanged.
pub fn serialize_doc(mut doc: Document) -> Document {
    if let Some(id) = doc.remove("_id") {
        doc.insert("id", id_string(&id));
    }
    let oid_keys: Vec<String> = doc
        .iter()
        .filter(|(_, value)| matches!(value, Bson::ObjectId(_)))
        .map(|(key, _)| key.clone())
        .collect();
    for key in oid_keys {
        if let Some(Bson::ObjectId(oid)) = doc.get(&key) {
            let hex = oid.to_hex();
            doc.insert(key, hex);
        }
    }
    doc
}

pub fn id_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}
