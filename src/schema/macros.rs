/// Declares a record struct and derives its [`Administrable`] impl.
///
/// Each field entry pairs the catalog-visible field name with a struct
/// field and a native type tag (`Id`, `Text`, `Integer`, `Decimal`,
/// `Boolean`, `Date`, `Time`). Descriptors come out in declaration order;
/// the generated factory fills unsubmitted fields with their type's
/// default. `Clone` is derived for you.
///
/// ```
/// entadmin::administrable! {
///     #[derive(Debug, PartialEq)]
///     pub struct SampleModel("SampleModels") {
///         "Id" => id: Id,
///         "Name" => name: Text,
///         "IntCount" => int_count: Integer,
///         "DecimalCount" => decimal_count: Decimal,
///         "BoolValue" => bool_value: Boolean,
///         "DateValue" => date_value: Date,
///     }
/// }
/// ```
///
/// [`Administrable`]: crate::schema::Administrable
#[macro_export]
macro_rules! administrable {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident($entity:literal) {
            $($fname:literal => $field:ident : $tag:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        $vis struct $name {
            $( pub $field: $crate::administrable!(@rust_ty $tag), )+
        }

        impl $crate::schema::Administrable for $name {
            fn entity_name() -> &'static str {
                $entity
            }

            fn fields() -> ::std::vec::Vec<$crate::schema::FieldDescriptor> {
                ::std::vec![
                    $(
                        $crate::schema::FieldDescriptor::new(
                            $fname,
                            $crate::core::NativeType::$tag,
                        ),
                    )+
                ]
            }

            fn get(&self, field: &str) -> ::std::option::Option<$crate::core::Value> {
                match field {
                    $( $fname => ::std::option::Option::Some(
                        $crate::administrable!(@wrap $tag, self.$field)
                    ), )+
                    _ => ::std::option::Option::None,
                }
            }

            fn from_values(
                values: &::std::collections::BTreeMap<
                    ::std::string::String,
                    $crate::core::Value,
                >,
            ) -> $crate::core::Result<Self> {
                ::std::result::Result::Ok(Self {
                    $( $field: $crate::administrable!(@extract $tag, $fname, values), )+
                })
            }
        }
    };

    (@rust_ty Id) => { ::std::string::String };
    (@rust_ty Text) => { ::std::string::String };
    (@rust_ty Integer) => { i64 };
    (@rust_ty Decimal) => { f64 };
    (@rust_ty Boolean) => { bool };
    (@rust_ty Date) => { $crate::chrono::NaiveDate };
    (@rust_ty Time) => { $crate::chrono::NaiveTime };

    (@wrap Id, $e:expr) => { $crate::core::Value::Id($e.clone()) };
    (@wrap Text, $e:expr) => { $crate::core::Value::Text($e.clone()) };
    (@wrap Integer, $e:expr) => { $crate::core::Value::Integer($e) };
    (@wrap Decimal, $e:expr) => { $crate::core::Value::Decimal($e) };
    (@wrap Boolean, $e:expr) => { $crate::core::Value::Boolean($e) };
    (@wrap Date, $e:expr) => { $crate::core::Value::Date($e) };
    (@wrap Time, $e:expr) => { $crate::core::Value::Time($e) };

    (@extract Id, $fname:literal, $values:ident) => {
        $crate::schema::entity::field_ops::take_id($fname, $values)?
    };
    (@extract Text, $fname:literal, $values:ident) => {
        $crate::schema::entity::field_ops::take_text($fname, $values)?
    };
    (@extract Integer, $fname:literal, $values:ident) => {
        $crate::schema::entity::field_ops::take_i64($fname, $values)?
    };
    (@extract Decimal, $fname:literal, $values:ident) => {
        $crate::schema::entity::field_ops::take_f64($fname, $values)?
    };
    (@extract Boolean, $fname:literal, $values:ident) => {
        $crate::schema::entity::field_ops::take_bool($fname, $values)?
    };
    (@extract Date, $fname:literal, $values:ident) => {
        $crate::schema::entity::field_ops::take_date($fname, $values)?
    };
    (@extract Time, $fname:literal, $values:ident) => {
        $crate::schema::entity::field_ops::take_time($fname, $values)?
    };
}
