/// Declares a UUID-backed id newtype for an in-memory entity
/// (chat message, uploaded file record).
///
/// Ids are only compared and used as keys of keyed lists in the UI.
#[macro_export]
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            pub fn new_v4() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::uuid_id!(SampleId);

    #[test]
    fn test_new_ids_are_unique() {
        let a = SampleId::new_v4();
        let b = SampleId::new_v4();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_is_plain_uuid() {
        let id = SampleId::new_v4();
        assert_eq!(id.to_string(), id.0.to_string());
        assert_eq!(id.to_string().len(), 36);
    }
}
