//! Vocabularies shared across API domains.

use square_core::wire_enum;

wire_enum! {
    /// ISO 4217 currency codes accepted by the API.
    ///
    /// Each token is the three-letter alphabetic code; the standard defines
    /// its meaning.
    #[allow(missing_docs)]
    pub enum Currency {
        /// Currency could not be determined.
        UnknownCurrency => "UNKNOWN_CURRENCY",
        Aed => "AED",
        Afn => "AFN",
        All => "ALL",
        Amd => "AMD",
        Ang => "ANG",
        Aoa => "AOA",
        Ars => "ARS",
        Aud => "AUD",
        Awg => "AWG",
        Azn => "AZN",
        Bam => "BAM",
        Bbd => "BBD",
        Bdt => "BDT",
        Bgn => "BGN",
        Bhd => "BHD",
        Bif => "BIF",
        Bmd => "BMD",
        Bnd => "BND",
        Bob => "BOB",
        Bov => "BOV",
        Brl => "BRL",
        Bsd => "BSD",
        Btn => "BTN",
        Bwp => "BWP",
        Byr => "BYR",
        Bzd => "BZD",
        Cad => "CAD",
        Cdf => "CDF",
        Che => "CHE",
        Chf => "CHF",
        Chw => "CHW",
        Clf => "CLF",
        Clp => "CLP",
        Cny => "CNY",
        Cop => "COP",
        Cou => "COU",
        Crc => "CRC",
        Cuc => "CUC",
        Cup => "CUP",
        Cve => "CVE",
        Czk => "CZK",
        Djf => "DJF",
        Dkk => "DKK",
        Dop => "DOP",
        Dzd => "DZD",
        Egp => "EGP",
        Ern => "ERN",
        Etb => "ETB",
        Eur => "EUR",
        Fjd => "FJD",
        Fkp => "FKP",
        Gbp => "GBP",
        Gel => "GEL",
        Ghs => "GHS",
        Gip => "GIP",
        Gmd => "GMD",
        Gnf => "GNF",
        Gtq => "GTQ",
        Gyd => "GYD",
        Hkd => "HKD",
        Hnl => "HNL",
        Hrk => "HRK",
        Htg => "HTG",
        Huf => "HUF",
        Idr => "IDR",
        Ils => "ILS",
        Inr => "INR",
        Iqd => "IQD",
        Irr => "IRR",
        Isk => "ISK",
        Jmd => "JMD",
        Jod => "JOD",
        Jpy => "JPY",
        Kes => "KES",
        Kgs => "KGS",
        Khr => "KHR",
        Kmf => "KMF",
        Kpw => "KPW",
        Krw => "KRW",
        Kwd => "KWD",
        Kyd => "KYD",
        Kzt => "KZT",
        Lak => "LAK",
        Lbp => "LBP",
        Lkr => "LKR",
        Lrd => "LRD",
        Lsl => "LSL",
        Lyd => "LYD",
        Mad => "MAD",
        Mdl => "MDL",
        Mga => "MGA",
        Mkd => "MKD",
        Mmk => "MMK",
        Mnt => "MNT",
        Mop => "MOP",
        Mro => "MRO",
        Mur => "MUR",
        Mvr => "MVR",
        Mwk => "MWK",
        Mxn => "MXN",
        Mxv => "MXV",
        Myr => "MYR",
        Mzn => "MZN",
        Nad => "NAD",
        Ngn => "NGN",
        Nio => "NIO",
        Nok => "NOK",
        Npr => "NPR",
        Nzd => "NZD",
        Omr => "OMR",
        Pab => "PAB",
        Pen => "PEN",
        Pgk => "PGK",
        Php => "PHP",
        Pkr => "PKR",
        Pln => "PLN",
        Pyg => "PYG",
        Qar => "QAR",
        Ron => "RON",
        Rsd => "RSD",
        Rub => "RUB",
        Rwf => "RWF",
        Sar => "SAR",
        Sbd => "SBD",
        Scr => "SCR",
        Sdg => "SDG",
        Sek => "SEK",
        Sgd => "SGD",
        Shp => "SHP",
        Sll => "SLL",
        Sle => "SLE",
        Sos => "SOS",
        Srd => "SRD",
        Ssp => "SSP",
        Std => "STD",
        Svc => "SVC",
        Syp => "SYP",
        Szl => "SZL",
        Thb => "THB",
        Tjs => "TJS",
        Tmt => "TMT",
        Tnd => "TND",
        Top => "TOP",
        Try => "TRY",
        Ttd => "TTD",
        Twd => "TWD",
        Tzs => "TZS",
        Uah => "UAH",
        Ugx => "UGX",
        Usd => "USD",
        Usn => "USN",
        Uss => "USS",
        Uyi => "UYI",
        Uyu => "UYU",
        Uzs => "UZS",
        Vef => "VEF",
        Vnd => "VND",
        Vuv => "VUV",
        Wst => "WST",
        Xaf => "XAF",
        Xag => "XAG",
        Xau => "XAU",
        Xba => "XBA",
        Xbb => "XBB",
        Xbc => "XBC",
        Xbd => "XBD",
        Xcd => "XCD",
        Xdr => "XDR",
        Xof => "XOF",
        Xpd => "XPD",
        Xpf => "XPF",
        Xpt => "XPT",
        Xts => "XTS",
        Xxx => "XXX",
        Yer => "YER",
        Zar => "ZAR",
        Zmk => "ZMK",
        Zmw => "ZMW",
        /// Bitcoin.
        Btc => "BTC",
        /// USD Coin.
        Xus => "XUS",
    }
}

impl Currency {
    /// Number of minor units (decimal places) in the currency's smallest
    /// denomination, for the currencies that differ from the usual two.
    #[must_use]
    pub fn minor_unit_exponent(&self) -> u32 {
        match self {
            Self::Bif
            | Self::Clp
            | Self::Djf
            | Self::Gnf
            | Self::Isk
            | Self::Jpy
            | Self::Kmf
            | Self::Krw
            | Self::Pyg
            | Self::Rwf
            | Self::Ugx
            | Self::Uyi
            | Self::Vnd
            | Self::Vuv
            | Self::Xaf
            | Self::Xof
            | Self::Xpf => 0,
            Self::Bhd | Self::Iqd | Self::Jod | Self::Kwd | Self::Lyd | Self::Omr | Self::Tnd => 3,
            Self::Clf => 4,
            _ => 2,
        }
    }
}

wire_enum! {
    /// ISO 3166 Alpha-2 country codes.
    ///
    /// Each token is the two-letter code the standard assigns to a country.
    #[allow(missing_docs)]
    pub enum Country {
        /// Country could not be determined.
        Zz => "ZZ",
        Ad => "AD",
        Ae => "AE",
        Ar => "AR",
        At => "AT",
        Au => "AU",
        Be => "BE",
        Bg => "BG",
        Br => "BR",
        Ca => "CA",
        Ch => "CH",
        Cl => "CL",
        Cn => "CN",
        Co => "CO",
        Cz => "CZ",
        De => "DE",
        Dk => "DK",
        Ee => "EE",
        Es => "ES",
        Fi => "FI",
        Fr => "FR",
        Gb => "GB",
        Gr => "GR",
        Hk => "HK",
        Hr => "HR",
        Hu => "HU",
        Ie => "IE",
        In => "IN",
        It => "IT",
        Jp => "JP",
        Kr => "KR",
        Lt => "LT",
        Lu => "LU",
        Lv => "LV",
        Mx => "MX",
        Nl => "NL",
        No => "NO",
        Nz => "NZ",
        Pe => "PE",
        Pl => "PL",
        Pt => "PT",
        Ro => "RO",
        Se => "SE",
        Sg => "SG",
        Si => "SI",
        Sk => "SK",
        Us => "US",
        Za => "ZA",
    }
}

wire_enum! {
    /// Sort direction for list and search endpoints.
    pub enum SortOrder {
        /// Newest or largest first.
        Desc => "DESC",
        /// Oldest or smallest first.
        Asc => "ASC",
    }
}

wire_enum! {
    /// Day of the week, as used by business hours.
    ///
    /// Tokens are three-letter English abbreviations, `MON` through `SUN`.
    pub enum DayOfWeek {
        /// Sunday.
        Sun => "SUN",
        /// Monday.
        Mon => "MON",
        /// Tuesday.
        Tue => "TUE",
        /// Wednesday.
        Wed => "WED",
        /// Thursday.
        Thu => "THU",
        /// Friday.
        Fri => "FRI",
        /// Saturday.
        Sat => "SAT",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use square_core::WireEnum;

    #[test]
    fn test_currency_tokens_round_trip() {
        for currency in Currency::known() {
            assert!(currency.is_recognized());
            assert_eq!(Currency::from_token(currency.as_str()), currency);
        }
    }

    #[test]
    fn test_minor_units() {
        assert_eq!(Currency::Usd.minor_unit_exponent(), 2);
        assert_eq!(Currency::Jpy.minor_unit_exponent(), 0);
        assert_eq!(Currency::Kwd.minor_unit_exponent(), 3);
        assert_eq!(Currency::Unrecognized("ABC".into()).minor_unit_exponent(), 2);
    }

    #[test]
    fn test_day_of_week_order() {
        assert_eq!(DayOfWeek::VALUES.first(), Some(&"SUN"));
        assert_eq!(DayOfWeek::VALUES.len(), 7);
    }
}
