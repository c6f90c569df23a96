/// Declares an enumeration with fixed wire strings
///
/// Generates `as_str`, `Display`, `FromStr` (failing with
/// `OchpError::UnknownVariant`) and serde support using the wire strings.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$variant_meta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// All values, in declaration order
            pub const ALL: &'static [$name] = &[$( $name::$variant ),+];

            /// The wire representation
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ochp_core::OchpError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $( $wire => Ok($name::$variant), )+
                    other => Err(ochp_core::OchpError::UnknownVariant {
                        kind: stringify!($name),
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

/// Declares a response that carries nothing but its [`ResultStatus`]
///
/// [`ResultStatus`]: crate::types::ResultStatus
macro_rules! result_response {
    ($(#[$meta:meta])* $name:ident => $element:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
        pub struct $name {
            pub result: $crate::types::ResultStatus,
        }

        impl $name {
            pub fn ok() -> Self {
                Self::default()
            }
        }

        impl ochp_core::FromXml for $name {
            fn from_xml(element: &xmltree::Element) -> ochp_core::OchpResult<Self> {
                Ok(Self {
                    result: ochp_core::ElementExt::map_element(element, $crate::message::RESULT)?,
                })
            }
        }

        impl ochp_core::ToXml for $name {
            fn to_xml_named(&self, name: &str) -> xmltree::Element {
                ochp_core::BuildElement::with_element(
                    ochp_core::xml::ochp_element(name),
                    $crate::message::RESULT,
                    &self.result,
                )
            }
        }

        impl $crate::message::OchpMessage for $name {
            const ELEMENT: &'static str = $element;
        }

        impl $crate::message::OchpResponse for $name {
            fn from_result(result: $crate::types::ResultStatus) -> Self {
                Self { result }
            }

            fn result(&self) -> &$crate::types::ResultStatus {
                &self.result
            }
        }
    };
}
