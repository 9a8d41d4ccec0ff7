/// Builds an [`ExoplanetRecord`](crate::models::ExoplanetRecord) from the
/// compact key/value layout used by the seed catalog.
///
/// The optional fields (`ecc`, `flux`, `star`, `stellar`) are always spelled
/// out in the seed data, so the macro wraps them in `Some`.
///
/// Usage:
///   seed_record! {
///       id: "kepler-22b", name: "Kepler-22b",
///       ra: 19.16, dec: 47.89, distance: 600.0,
///       radius: 2.38, mass: 6.4, temperature: 262.0, period: 289.9,
///       star: "G", year: 2011,
///       stellar: (0.98, 0.97, 5518.0),
///       ecc: 0.0, flux: 0.53,
///   }
#[macro_export]
macro_rules! seed_record {
    (
        id: $id:expr, name: $name:expr,
        ra: $ra:expr, dec: $dec:expr, distance: $distance:expr,
        radius: $radius:expr, mass: $mass:expr, temperature: $temp:expr, period: $period:expr,
        star: $star:expr, year: $year:expr,
        stellar: ($srad:expr, $smass:expr, $steff:expr),
        ecc: $ecc:expr, flux: $flux:expr $(,)?
    ) => {
        $crate::models::ExoplanetRecord {
            id: ::std::string::String::from($id),
            name: ::std::string::String::from($name),
            ra: ::qtty::Degrees::new($ra),
            dec: ::qtty::Degrees::new($dec),
            distance: ::qtty::Parsecs::new($distance),
            radius: $radius,
            mass: $mass,
            temperature: $temp,
            period: $period,
            orbital_eccentricity: ::std::option::Option::Some($ecc),
            insolation_flux: ::std::option::Option::Some($flux),
            star_type: ::std::option::Option::Some(::std::string::String::from($star)),
            discovery_year: $year,
            stellar_radius: ::std::option::Option::Some($srad),
            stellar_mass: ::std::option::Option::Some($smass),
            stellar_temperature: ::std::option::Option::Some($steff),
        }
    };
}
