//! Embedded ISO 3166-1 reference table.
//!
//! `name` is the ISO short name; `common_name` carries the everyday wording
//! where it differs enough that fuzzy matching alone would be unreliable
//! (e.g. "Russia" for "Russian Federation"). Resolution logic lives in
//! [`crate::country`].

pub struct CountryEntry {
  pub code:        &'static str,
  pub name:        &'static str,
  pub common_name: Option<&'static str>,
}

const fn c(
  code: &'static str,
  name: &'static str,
  common_name: Option<&'static str>,
) -> CountryEntry {
  CountryEntry {
    code,
    name,
    common_name,
  }
}

pub const COUNTRIES: &[CountryEntry] = &[
  c("AF", "Afghanistan", None),
  c("AX", "Åland Islands", None),
  c("AL", "Albania", None),
  c("DZ", "Algeria", None),
  c("AS", "American Samoa", None),
  c("AD", "Andorra", None),
  c("AO", "Angola", None),
  c("AI", "Anguilla", None),
  c("AQ", "Antarctica", None),
  c("AG", "Antigua and Barbuda", None),
  c("AR", "Argentina", None),
  c("AM", "Armenia", None),
  c("AW", "Aruba", None),
  c("AU", "Australia", None),
  c("AT", "Austria", None),
  c("AZ", "Azerbaijan", None),
  c("BS", "Bahamas", None),
  c("BH", "Bahrain", None),
  c("BD", "Bangladesh", None),
  c("BB", "Barbados", None),
  c("BY", "Belarus", None),
  c("BE", "Belgium", None),
  c("BZ", "Belize", None),
  c("BJ", "Benin", None),
  c("BM", "Bermuda", None),
  c("BT", "Bhutan", None),
  c("BO", "Bolivia, Plurinational State of", Some("Bolivia")),
  c("BQ", "Bonaire, Sint Eustatius and Saba", None),
  c("BA", "Bosnia and Herzegovina", None),
  c("BW", "Botswana", None),
  c("BV", "Bouvet Island", None),
  c("BR", "Brazil", None),
  c("IO", "British Indian Ocean Territory", None),
  c("BN", "Brunei Darussalam", Some("Brunei")),
  c("BG", "Bulgaria", None),
  c("BF", "Burkina Faso", None),
  c("BI", "Burundi", None),
  c("CV", "Cabo Verde", Some("Cape Verde")),
  c("KH", "Cambodia", None),
  c("CM", "Cameroon", None),
  c("CA", "Canada", None),
  c("KY", "Cayman Islands", None),
  c("CF", "Central African Republic", None),
  c("TD", "Chad", None),
  c("CL", "Chile", None),
  c("CN", "China", None),
  c("CX", "Christmas Island", None),
  c("CC", "Cocos (Keeling) Islands", None),
  c("CO", "Colombia", None),
  c("KM", "Comoros", None),
  c("CG", "Congo", None),
  c("CD", "Congo, The Democratic Republic of the", None),
  c("CK", "Cook Islands", None),
  c("CR", "Costa Rica", None),
  c("CI", "Côte d'Ivoire", Some("Ivory Coast")),
  c("HR", "Croatia", None),
  c("CU", "Cuba", None),
  c("CW", "Curaçao", None),
  c("CY", "Cyprus", None),
  c("CZ", "Czechia", Some("Czech Republic")),
  c("DK", "Denmark", None),
  c("DJ", "Djibouti", None),
  c("DM", "Dominica", None),
  c("DO", "Dominican Republic", None),
  c("EC", "Ecuador", None),
  c("EG", "Egypt", None),
  c("SV", "El Salvador", None),
  c("GQ", "Equatorial Guinea", None),
  c("ER", "Eritrea", None),
  c("EE", "Estonia", None),
  c("SZ", "Eswatini", Some("Swaziland")),
  c("ET", "Ethiopia", None),
  c("FK", "Falkland Islands (Malvinas)", Some("Falkland Islands")),
  c("FO", "Faroe Islands", None),
  c("FJ", "Fiji", None),
  c("FI", "Finland", None),
  c("FR", "France", None),
  c("GF", "French Guiana", None),
  c("PF", "French Polynesia", None),
  c("TF", "French Southern Territories", None),
  c("GA", "Gabon", None),
  c("GM", "Gambia", None),
  c("GE", "Georgia", None),
  c("DE", "Germany", None),
  c("GH", "Ghana", None),
  c("GI", "Gibraltar", None),
  c("GR", "Greece", None),
  c("GL", "Greenland", None),
  c("GD", "Grenada", None),
  c("GP", "Guadeloupe", None),
  c("GU", "Guam", None),
  c("GT", "Guatemala", None),
  c("GG", "Guernsey", None),
  c("GN", "Guinea", None),
  c("GW", "Guinea-Bissau", None),
  c("GY", "Guyana", None),
  c("HT", "Haiti", None),
  c("HM", "Heard Island and McDonald Islands", None),
  c("VA", "Holy See (Vatican City State)", Some("Vatican City")),
  c("HN", "Honduras", None),
  c("HK", "Hong Kong", None),
  c("HU", "Hungary", None),
  c("IS", "Iceland", None),
  c("IN", "India", None),
  c("ID", "Indonesia", None),
  c("IR", "Iran, Islamic Republic of", Some("Iran")),
  c("IQ", "Iraq", None),
  c("IE", "Ireland", None),
  c("IM", "Isle of Man", None),
  c("IL", "Israel", None),
  c("IT", "Italy", None),
  c("JM", "Jamaica", None),
  c("JP", "Japan", None),
  c("JE", "Jersey", None),
  c("JO", "Jordan", None),
  c("KZ", "Kazakhstan", None),
  c("KE", "Kenya", None),
  c("KI", "Kiribati", None),
  c(
    "KP",
    "Korea, Democratic People's Republic of",
    Some("North Korea"),
  ),
  c("KR", "Korea, Republic of", Some("South Korea")),
  c("KW", "Kuwait", None),
  c("KG", "Kyrgyzstan", None),
  c("LA", "Lao People's Democratic Republic", Some("Laos")),
  c("LV", "Latvia", None),
  c("LB", "Lebanon", None),
  c("LS", "Lesotho", None),
  c("LR", "Liberia", None),
  c("LY", "Libya", None),
  c("LI", "Liechtenstein", None),
  c("LT", "Lithuania", None),
  c("LU", "Luxembourg", None),
  c("MO", "Macao", Some("Macau")),
  c("MG", "Madagascar", None),
  c("MW", "Malawi", None),
  c("MY", "Malaysia", None),
  c("MV", "Maldives", None),
  c("ML", "Mali", None),
  c("MT", "Malta", None),
  c("MH", "Marshall Islands", None),
  c("MQ", "Martinique", None),
  c("MR", "Mauritania", None),
  c("MU", "Mauritius", None),
  c("YT", "Mayotte", None),
  c("MX", "Mexico", None),
  c("FM", "Micronesia, Federated States of", Some("Micronesia")),
  c("MD", "Moldova, Republic of", Some("Moldova")),
  c("MC", "Monaco", None),
  c("MN", "Mongolia", None),
  c("ME", "Montenegro", None),
  c("MS", "Montserrat", None),
  c("MA", "Morocco", None),
  c("MZ", "Mozambique", None),
  c("MM", "Myanmar", Some("Burma")),
  c("NA", "Namibia", None),
  c("NR", "Nauru", None),
  c("NP", "Nepal", None),
  c("NL", "Netherlands", None),
  c("NC", "New Caledonia", None),
  c("NZ", "New Zealand", None),
  c("NI", "Nicaragua", None),
  c("NE", "Niger", None),
  c("NG", "Nigeria", None),
  c("NU", "Niue", None),
  c("NF", "Norfolk Island", None),
  c("MK", "North Macedonia", Some("Macedonia")),
  c("MP", "Northern Mariana Islands", None),
  c("NO", "Norway", None),
  c("OM", "Oman", None),
  c("PK", "Pakistan", None),
  c("PW", "Palau", None),
  c("PS", "Palestine, State of", Some("Palestine")),
  c("PA", "Panama", None),
  c("PG", "Papua New Guinea", None),
  c("PY", "Paraguay", None),
  c("PE", "Peru", None),
  c("PH", "Philippines", None),
  c("PN", "Pitcairn", None),
  c("PL", "Poland", None),
  c("PT", "Portugal", None),
  c("PR", "Puerto Rico", None),
  c("QA", "Qatar", None),
  c("RE", "Réunion", None),
  c("RO", "Romania", None),
  c("RU", "Russian Federation", Some("Russia")),
  c("RW", "Rwanda", None),
  c("BL", "Saint Barthélemy", None),
  c("SH", "Saint Helena, Ascension and Tristan da Cunha", None),
  c("KN", "Saint Kitts and Nevis", None),
  c("LC", "Saint Lucia", None),
  c("MF", "Saint Martin (French part)", None),
  c("PM", "Saint Pierre and Miquelon", None),
  c("VC", "Saint Vincent and the Grenadines", None),
  c("WS", "Samoa", None),
  c("SM", "San Marino", None),
  c("ST", "Sao Tome and Principe", None),
  c("SA", "Saudi Arabia", None),
  c("SN", "Senegal", None),
  c("RS", "Serbia", None),
  c("SC", "Seychelles", None),
  c("SL", "Sierra Leone", None),
  c("SG", "Singapore", None),
  c("SX", "Sint Maarten (Dutch part)", None),
  c("SK", "Slovakia", None),
  c("SI", "Slovenia", None),
  c("SB", "Solomon Islands", None),
  c("SO", "Somalia", None),
  c("ZA", "South Africa", None),
  c("GS", "South Georgia and the South Sandwich Islands", None),
  c("SS", "South Sudan", None),
  c("ES", "Spain", None),
  c("LK", "Sri Lanka", None),
  c("SD", "Sudan", None),
  c("SR", "Suriname", None),
  c("SJ", "Svalbard and Jan Mayen", None),
  c("SE", "Sweden", None),
  c("CH", "Switzerland", None),
  c("SY", "Syrian Arab Republic", Some("Syria")),
  c("TW", "Taiwan, Province of China", Some("Taiwan")),
  c("TJ", "Tajikistan", None),
  c("TZ", "Tanzania, United Republic of", Some("Tanzania")),
  c("TH", "Thailand", None),
  c("TL", "Timor-Leste", Some("East Timor")),
  c("TG", "Togo", None),
  c("TK", "Tokelau", None),
  c("TO", "Tonga", None),
  c("TT", "Trinidad and Tobago", None),
  c("TN", "Tunisia", None),
  c("TR", "Türkiye", Some("Turkey")),
  c("TM", "Turkmenistan", None),
  c("TC", "Turks and Caicos Islands", None),
  c("TV", "Tuvalu", None),
  c("UG", "Uganda", None),
  c("UA", "Ukraine", None),
  c("AE", "United Arab Emirates", None),
  c("GB", "United Kingdom", Some("Great Britain")),
  c("US", "United States", Some("USA")),
  c("UM", "United States Minor Outlying Islands", None),
  c("UY", "Uruguay", None),
  c("UZ", "Uzbekistan", None),
  c("VU", "Vanuatu", None),
  c("VE", "Venezuela, Bolivarian Republic of", Some("Venezuela")),
  c("VN", "Viet Nam", Some("Vietnam")),
  c("VG", "Virgin Islands, British", None),
  c("VI", "Virgin Islands, U.S.", None),
  c("WF", "Wallis and Futuna", None),
  c("EH", "Western Sahara", None),
  c("YE", "Yemen", None),
  c("ZM", "Zambia", None),
  c("ZW", "Zimbabwe", None),
];
