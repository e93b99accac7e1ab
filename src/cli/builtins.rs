use skillviz::dataset::load::Format;

/// A dataset compiled into the binary.
pub trait BuiltinDataset {
    fn reader(&self) -> std::io::Cursor<&'static [u8]>;
    fn format(&self) -> Format;
}

macro_rules! impl_builtin_dataset {
    ($struct:ident, $($field:ident => $filepath:literal as $format:ident),*) => {
        impl crate::cli::builtins::BuiltinDataset for $struct {
            fn reader(&self) -> std::io::Cursor<&'static [u8]> {
                match self {
                    $(
                        Self::$field => {
                            include_flate::flate!(static DATA: [u8] from $filepath);
                            std::io::Cursor::new(DATA.as_slice())
                        }
                    )*
                }
            }

            fn format(&self) -> skillviz::dataset::load::Format {
                match self {
                    $(Self::$field => skillviz::dataset::load::Format::$format,)*
                }
            }
        }
    };
}
pub(crate) use impl_builtin_dataset;
