#[macro_export]
macro_rules! scalar_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (
                TinyInt,
                Integer,
                name = "byte",
                width_bits = 8,
                has_null_sentinel = true
            ),
            (
                SmallInt,
                Integer,
                name = "short",
                width_bits = 16,
                has_null_sentinel = true
            ),
            (
                Integer,
                Integer,
                name = "int",
                width_bits = 32,
                has_null_sentinel = true
            ),
            (
                BigInt,
                Integer,
                name = "long",
                width_bits = 64,
                has_null_sentinel = true
            ),
            (
                Float,
                Float,
                name = "double",
                width_bits = 64,
                has_null_sentinel = true
            ),
            (
                Decimal,
                Decimal,
                name = "decimal",
                width_bits = 0,
                has_null_sentinel = false
            ),
            (
                Text,
                Textual,
                name = "string",
                width_bits = 0,
                has_null_sentinel = false
            ),
            (
                Bytes,
                Binary,
                name = "varbinary",
                width_bits = 0,
                has_null_sentinel = false
            ),
            (
                Timestamp,
                Temporal,
                name = "timestamp",
                width_bits = 0,
                has_null_sentinel = false
            ),
            (
                DateTime,
                Temporal,
                name = "datetime",
                width_bits = 0,
                has_null_sentinel = false
            ),
            (
                Date,
                Temporal,
                name = "date",
                width_bits = 0,
                has_null_sentinel = false
            ),
            (
                Instant,
                Temporal,
                name = "instant",
                width_bits = 0,
                has_null_sentinel = false
            ),
            (
                Table,
                Tabular,
                name = "table",
                width_bits = 0,
                has_null_sentinel = false
            ),
        }
    };
}

#[macro_export]
macro_rules! scalar_kind_registry {
    ($macro:ident) => {
        $crate::scalar_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::scalar_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($scalar:ident, $family:ident, name = $name:expr, width_bits = $width:expr, has_null_sentinel = $sentinel:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ScalarKind::$scalar => $crate::ScalarMetadata {
                    family: $crate::ScalarFamily::$family,
                    name: $name,
                    width_bits: $width,
                    has_null_sentinel: $sentinel,
                },
            )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($scalar:ident, $family:ident, name = $name:expr, width_bits = $width:expr, has_null_sentinel = $sentinel:expr) ),* $(,)? ) => {
        [ $( $crate::ScalarKind::$scalar ),* ]
    };
}
