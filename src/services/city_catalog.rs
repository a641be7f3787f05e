//! Catálogo de ciudades
//!
//! Ciudades principales de Brasil por estado, usadas para construir las
//! ubicaciones "Ciudad - UF" de las programaciones.

use lazy_static::lazy_static;

use crate::models::schedule::LOCATION_SEPARATOR;

const CITIES_BY_STATE: &[(&str, &[&str])] = &[
    ("AC", &["Rio Branco", "Cruzeiro do Sul", "Sena Madureira"]),
    ("AL", &["Maceió", "Arapiraca", "Palmeira dos Índios"]),
    ("AP", &["Macapá", "Santana", "Laranjal do Jari"]),
    ("AM", &["Manaus", "Parintins", "Itacoatiara"]),
    ("BA", &["Salvador", "Feira de Santana", "Vitória da Conquista", "Camaçari", "Juazeiro"]),
    ("CE", &["Fortaleza", "Caucaia", "Juazeiro do Norte", "Maracanaú"]),
    ("DF", &["Brasília"]),
    (
        "ES",
        &[
            "Vitória",
            "Vila Velha",
            "Serra",
            "Cariacica",
            "Viana",
            "Guarapari",
            "Linhares",
            "Cachoeiro de Itapemirim",
            "São Mateus",
            "Colatina",
        ],
    ),
    ("GO", &["Goiânia", "Aparecida de Goiânia", "Anápolis", "Rio Verde"]),
    ("MA", &["São Luís", "Imperatriz", "São José de Ribamar", "Timon"]),
    ("MT", &["Cuiabá", "Várzea Grande", "Rondonópolis", "Sinop"]),
    ("MS", &["Campo Grande", "Dourados", "Três Lagoas", "Corumbá"]),
    ("MG", &["Belo Horizonte", "Uberlândia", "Contagem", "Juiz de Fora", "Betim", "Montes Claros"]),
    ("PA", &["Belém", "Ananindeua", "Santarém", "Marabá"]),
    ("PB", &["João Pessoa", "Campina Grande", "Santa Rita", "Patos"]),
    ("PR", &["Curitiba", "Londrina", "Maringá", "Ponta Grossa", "Cascavel", "Foz do Iguaçu"]),
    ("PE", &["Recife", "Jaboatão dos Guararapes", "Olinda", "Paulista", "Caruaru"]),
    ("PI", &["Teresina", "Parnaíba", "Picos", "Floriano"]),
    ("RJ", &["Rio de Janeiro", "São Gonçalo", "Duque de Caxias", "Nova Iguaçu", "Niterói", "Belford Roxo"]),
    ("RN", &["Natal", "Mossoró", "Parnamirim", "São Gonçalo do Amarante"]),
    ("RS", &["Porto Alegre", "Caxias do Sul", "Pelotas", "Canoas", "Santa Maria", "Gravataí"]),
    ("RO", &["Porto Velho", "Ji-Paraná", "Ariquemes", "Vilhena"]),
    ("RR", &["Boa Vista", "Rorainópolis", "Caracaraí"]),
    ("SC", &["Florianópolis", "Joinville", "Blumenau", "São José", "Chapecó", "Criciúma"]),
    ("SE", &["Aracaju", "Nossa Senhora do Socorro", "Lagarto", "Itabaiana"]),
    (
        "SP",
        &[
            "São Paulo",
            "Guarulhos",
            "Campinas",
            "São Bernardo do Campo",
            "Santo André",
            "Osasco",
            "São José dos Campos",
            "Ribeirão Preto",
            "Sorocaba",
            "Santos",
        ],
    ),
    ("TO", &["Palmas", "Araguaína", "Gurupi", "Porto Nacional"]),
];

/// Ubicación del catálogo
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CityEntry {
    pub city: &'static str,
    pub state: &'static str,
    pub location: String,
}

lazy_static! {
    static ref ALL_CITIES: Vec<CityEntry> = {
        let mut cities: Vec<CityEntry> = CITIES_BY_STATE
            .iter()
            .flat_map(|&(state, cities)| {
                cities.iter().map(move |&city| CityEntry {
                    city,
                    state,
                    location: format!("{}{}{}", city, LOCATION_SEPARATOR, state),
                })
            })
            .collect();
        cities.sort_by(|a, b| a.location.cmp(&b.location));
        cities
    };
}

/// Siglas de los estados en orden alfabético
pub fn states() -> Vec<&'static str> {
    let mut states: Vec<&'static str> = CITIES_BY_STATE.iter().map(|(state, _)| *state).collect();
    states.sort_unstable();
    states
}

/// Buscar ciudades por estado y/o texto (sin distinguir mayúsculas)
pub fn search(state: Option<&str>, query: Option<&str>) -> Vec<CityEntry> {
    let query = query.map(|q| q.trim().to_lowercase()).filter(|q| !q.is_empty());
    ALL_CITIES
        .iter()
        .filter(|entry| state.map_or(true, |uf| entry.state.eq_ignore_ascii_case(uf)))
        .filter(|entry| {
            query
                .as_ref()
                .map_or(true, |q| entry.location.to_lowercase().contains(q))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_by_state() {
        let es = search(Some("es"), None);
        assert_eq!(es.len(), 10);
        assert!(es.iter().all(|c| c.state == "ES"));
        assert!(es.iter().any(|c| c.location == "Vitória - ES"));
    }

    #[test]
    fn test_search_by_text_across_states() {
        let found = search(None, Some("vitória"));
        let locations: Vec<&str> = found.iter().map(|c| c.location.as_str()).collect();
        assert_eq!(locations, vec!["Vitória - ES", "Vitória da Conquista - BA"]);
    }

    #[test]
    fn test_states_are_sorted() {
        let all = states();
        assert_eq!(all.len(), 27);
        assert_eq!(all.first(), Some(&"AC"));
        assert_eq!(all.last(), Some(&"TO"));
    }
}
