//! Literal currency table.
//!
//! Sorted by code. The unique-symbol index is derived from this table in
//! `catalog`, never maintained by hand.

use coinage_shared::Currency;

/// Every currency known to the catalog.
pub static CURRENCIES: &[Currency] = &[
    Currency::new("AED", "United Arab Emirates Dirham", "د.إ", 2),
    Currency::new("AFN", "Afghan Afghani", "؋", 2),
    Currency::new("ALL", "Albanian Lek", "L", 2),
    Currency::new("AMD", "Armenian Dram", "֏", 2),
    Currency::new("ANG", "Netherlands Antillean Guilder", "ƒ", 2),
    Currency::new("AOA", "Angolan Kwanza", "Kz", 2),
    Currency::new("ARS", "Argentine Peso", "$", 2),
    Currency::new("AUD", "Australian Dollar", "A$", 2),
    Currency::new("AWG", "Aruban Florin", "ƒ", 2),
    Currency::new("AZN", "Azerbaijani Manat", "₼", 2),
    Currency::new("BAM", "Bosnia and Herzegovina Convertible Mark", "KM", 2),
    Currency::new("BBD", "Barbadian Dollar", "Bds$", 2),
    Currency::new("BDT", "Bangladeshi Taka", "৳", 2),
    Currency::new("BGN", "Bulgarian Lev", "лв", 2),
    Currency::new("BHD", "Bahraini Dinar", ".د.ب", 3),
    Currency::new("BIF", "Burundian Franc", "FBu", 0),
    Currency::new("BMD", "Bermudian Dollar", "$", 2),
    Currency::new("BND", "Brunei Dollar", "B$", 2),
    Currency::new("BOB", "Bolivian Boliviano", "Bs.", 2),
    Currency::new("BRL", "Brazilian Real", "R$", 2),
    Currency::new("BSD", "Bahamian Dollar", "B$", 2),
    Currency::new("BTN", "Bhutanese Ngultrum", "Nu.", 2),
    Currency::new("BWP", "Botswana Pula", "P", 2),
    Currency::new("BYN", "Belarusian Ruble", "Br", 2),
    Currency::new("BZD", "Belize Dollar", "BZ$", 2),
    Currency::new("CAD", "Canadian Dollar", "C$", 2),
    Currency::new("CDF", "Congolese Franc", "FC", 2),
    Currency::new("CHF", "Swiss Franc", "Fr", 2),
    Currency::new("CLP", "Chilean Peso", "$", 0),
    Currency::new("CNY", "Chinese Yuan", "¥", 2),
    Currency::new("COP", "Colombian Peso", "$", 2),
    Currency::new("CRC", "Costa Rican Colón", "₡", 2),
    Currency::new("CUC", "Cuban Convertible Peso", "$", 2),
    Currency::new("CUP", "Cuban Peso", "₱", 2),
    Currency::new("CVE", "Cape Verdean Escudo", "$", 2),
    Currency::new("CZK", "Czech Koruna", "Kč", 2),
    Currency::new("DJF", "Djiboutian Franc", "Fdj", 0),
    Currency::new("DKK", "Danish Krone", "kr", 2),
    Currency::new("DOP", "Dominican Peso", "RD$", 2),
    Currency::new("DZD", "Algerian Dinar", "د.ج", 2),
    Currency::new("EGP", "Egyptian Pound", "£", 2),
    Currency::new("ERN", "Eritrean Nakfa", "Nfk", 2),
    Currency::new("ETB", "Ethiopian Birr", "Br", 2),
    Currency::new("EUR", "Euro", "€", 2),
    Currency::new("FJD", "Fijian Dollar", "FJ$", 2),
    Currency::new("FKP", "Falkland Islands Pound", "£", 2),
    Currency::new("FOK", "Faroese Króna", "kr", 2),
    Currency::new("GBP", "British Pound Sterling", "£", 2),
    Currency::new("GEL", "Georgian Lari", "₾", 2),
    Currency::new("GGP", "Guernsey Pound", "£", 2),
    Currency::new("GHS", "Ghanaian Cedi", "₵", 2),
    Currency::new("GIP", "Gibraltar Pound", "£", 2),
    Currency::new("GMD", "Gambian Dalasi", "D", 2),
    Currency::new("GNF", "Guinean Franc", "FG", 0),
    Currency::new("GTQ", "Guatemalan Quetzal", "Q", 2),
    Currency::new("GYD", "Guyanese Dollar", "G$", 2),
    Currency::new("HKD", "Hong Kong Dollar", "HK$", 2),
    Currency::new("HNL", "Honduran Lempira", "L", 2),
    Currency::new("HRK", "Croatian Kuna", "kn", 2),
    Currency::new("HTG", "Haitian Gourde", "G", 2),
    Currency::new("HUF", "Hungarian Forint", "Ft", 2),
    Currency::new("IDR", "Indonesian Rupiah", "Rp", 2),
    Currency::new("ILS", "Israeli New Shekel", "₪", 2),
    Currency::new("INR", "Indian Rupee", "₹", 2),
    Currency::new("IQD", "Iraqi Dinar", "ع.د", 3),
    Currency::new("IRR", "Iranian Rial", "﷼", 2),
    Currency::new("ISK", "Icelandic Króna", "kr", 0),
    Currency::new("JMD", "Jamaican Dollar", "J$", 2),
    Currency::new("JOD", "Jordanian Dinar", "د.ا", 3),
    Currency::new("JPY", "Japanese Yen", "¥", 0),
    Currency::new("KES", "Kenyan Shilling", "KSh", 2),
    Currency::new("KGS", "Kyrgyzstani Som", "с", 2),
    Currency::new("KHR", "Cambodian Riel", "៛", 2),
    Currency::new("KMF", "Comorian Franc", "CF", 0),
    Currency::new("KPW", "North Korean Won", "₩", 2),
    Currency::new("KRW", "South Korean Won", "₩", 0),
    Currency::new("KWD", "Kuwaiti Dinar", "د.ك", 3),
    Currency::new("KYD", "Cayman Islands Dollar", "CI$", 2),
    Currency::new("KZT", "Kazakhstani Tenge", "₸", 2),
    Currency::new("LAK", "Lao Kip", "₭", 2),
    Currency::new("LBP", "Lebanese Pound", "ل.ل", 2),
    Currency::new("LKR", "Sri Lankan Rupee", "Rs", 2),
    Currency::new("LRD", "Liberian Dollar", "L$", 2),
    Currency::new("LSL", "Lesotho Loti", "L", 2),
    Currency::new("LYD", "Libyan Dinar", "ل.د", 3),
    Currency::new("MAD", "Moroccan Dirham", "د.م.", 2),
    Currency::new("MDL", "Moldovan Leu", "L", 2),
    Currency::new("MGA", "Malagasy Ariary", "Ar", 2),
    Currency::new("MKD", "Macedonian Denar", "ден", 2),
    Currency::new("MMK", "Myanmar Kyat", "K", 2),
    Currency::new("MNT", "Mongolian Tögrög", "₮", 2),
    Currency::new("MOP", "Macanese Pataca", "P", 2),
    Currency::new("MRU", "Mauritanian Ouguiya", "UM", 2),
    Currency::new("MUR", "Mauritian Rupee", "₨", 2),
    Currency::new("MVR", "Maldivian Rufiyaa", "Rf", 2),
    Currency::new("MWK", "Malawian Kwacha", "MK", 2),
    Currency::new("MXN", "Mexican Peso", "$", 2),
    Currency::new("MYR", "Malaysian Ringgit", "RM", 2),
    Currency::new("MZN", "Mozambican Metical", "MT", 2),
    Currency::new("NAD", "Namibian Dollar", "N$", 2),
    Currency::new("NGN", "Nigerian Naira", "₦", 2),
    Currency::new("NIO", "Nicaraguan Córdoba", "C$", 2),
    Currency::new("NOK", "Norwegian Krone", "kr", 2),
    Currency::new("NPR", "Nepalese Rupee", "₨", 2),
    Currency::new("NZD", "New Zealand Dollar", "NZ$", 2),
    Currency::new("OMR", "Omani Rial", "ر.ع.", 3),
    Currency::new("PAB", "Panamanian Balboa", "B/.", 2),
    Currency::new("PEN", "Peruvian Sol", "S/", 2),
    Currency::new("PGK", "Papua New Guinean Kina", "K", 2),
    Currency::new("PHP", "Philippine Peso", "₱", 2),
    Currency::new("PKR", "Pakistani Rupee", "₨", 2),
    Currency::new("PLN", "Polish Złoty", "zł", 2),
    Currency::new("PYG", "Paraguayan Guaraní", "₲", 0),
    Currency::new("QAR", "Qatari Riyal", "ر.ق", 2),
    Currency::new("RON", "Romanian Leu", "lei", 2),
    Currency::new("RSD", "Serbian Dinar", "дин", 2),
    Currency::new("RUB", "Russian Ruble", "₽", 2),
    Currency::new("RWF", "Rwandan Franc", "FRw", 0),
    Currency::new("SAR", "Saudi Riyal", "ر.س", 2),
    Currency::new("SBD", "Solomon Islands Dollar", "SI$", 2),
    Currency::new("SCR", "Seychellois Rupee", "₨", 2),
    Currency::new("SDG", "Sudanese Pound", "ج.س.", 2),
    Currency::new("SEK", "Swedish Krona", "kr", 2),
    Currency::new("SGD", "Singapore Dollar", "S$", 2),
    Currency::new("SHP", "Saint Helena Pound", "£", 2),
    Currency::new("SLE", "Sierra Leonean Leone", "Le", 2),
    Currency::new("SLL", "Sierra Leonean Leone (old)", "Le", 2),
    Currency::new("SOS", "Somali Shilling", "Sh", 2),
    Currency::new("SRD", "Surinamese Dollar", "$", 2),
    Currency::new("SSP", "South Sudanese Pound", "£", 2),
    Currency::new("STN", "São Tomé and Príncipe Dobra", "Db", 2),
    Currency::new("SYP", "Syrian Pound", "£", 2),
    Currency::new("SZL", "Eswatini Lilangeni", "L", 2),
    Currency::new("THB", "Thai Baht", "฿", 2),
    Currency::new("TJS", "Tajikistani Somoni", "ЅМ", 2),
    Currency::new("TMT", "Turkmenistani Manat", "m", 2),
    Currency::new("TND", "Tunisian Dinar", "د.ت", 3),
    Currency::new("TOP", "Tongan Paʻanga", "T$", 2),
    Currency::new("TRY", "Turkish Lira", "₺", 2),
    Currency::new("TTD", "Trinidad and Tobago Dollar", "TT$", 2),
    Currency::new("TVD", "Tuvaluan Dollar", "$", 2),
    Currency::new("TWD", "New Taiwan Dollar", "NT$", 2),
    Currency::new("TZS", "Tanzanian Shilling", "Sh", 2),
    Currency::new("UAH", "Ukrainian Hryvnia", "₴", 2),
    Currency::new("UGX", "Ugandan Shilling", "Sh", 0),
    Currency::new("USD", "United States Dollar", "$", 2),
    Currency::new("UYU", "Uruguayan Peso", "$U", 2),
    Currency::new("UZS", "Uzbekistani So'm", "сўм", 2),
    Currency::new("VES", "Venezuelan Bolívar Soberano", "Bs.", 2),
    Currency::new("VND", "Vietnamese Đồng", "₫", 0),
    Currency::new("VUV", "Vanuatu Vatu", "VT", 0),
    Currency::new("WST", "Samoan Tālā", "T", 2),
    Currency::new("XAF", "Central African CFA Franc", "FCFA", 0),
    Currency::new("XCD", "East Caribbean Dollar", "$", 2),
    Currency::new("XOF", "West African CFA Franc", "CFA", 0),
    Currency::new("XPF", "CFP Franc", "₣", 0),
    Currency::new("YER", "Yemeni Rial", "﷼", 2),
    Currency::new("ZAR", "South African Rand", "R", 2),
    Currency::new("ZMW", "Zambian Kwacha", "K", 2),
    Currency::new("ZWL", "Zimbabwean Dollar", "Z$", 2),
];
