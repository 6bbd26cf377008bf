//! Machine values the BI-RADS rules and the composer branch on.
//!
//! Only values with classification semantics live here; purely descriptive
//! options stay as table entries in `fallback`.

pub const INDICACAO_MALIGNIDADE_COMPROVADA: &str = "malignidade_comprovada";

pub const CIRURGIA_MASTECTOMIA: &str = "mastectomia";

pub const CISTO_SIMPLES: &str = "simples";
pub const CISTO_MICROCISTOS_AGRUPADOS: &str = "microcistos_agrupados";
pub const CISTO_COMPLICADO: &str = "complicado";
pub const CISTO_COMPLEXO: &str = "complexo";

pub const FORMATO_IRREGULAR: &str = "irregular";
pub const MARGENS_MICROLOBULADAS: &str = "microlobuladas";
pub const MARGENS_INDISTINTAS: &str = "indistintas";
pub const MARGENS_ESPICULADAS: &str = "espiculadas";
pub const ACUSTICA_SOMBRA: &str = "sombra";

pub const CONTEUDO_ANECOICO: &str = "anecoico";
pub const CONTEUDO_ECOGENICO: &str = "ecogenico";

pub const RELACAO_SITIO_CIRURGICO: &str = "sitio_cirurgico";
pub const RELACAO_FORA_SITIO_CIRURGICO: &str = "fora_sitio_cirurgico";
pub const ASPECTO_ESPICULADO: &str = "espiculado";

pub const IMPLANTE_INTEGRO: &str = "integro";
pub const IMPLANTE_ROTURA_INTRACAPSULAR: &str = "rotura_intracapsular";
pub const IMPLANTE_ROTURA_EXTRACAPSULAR: &str = "rotura_extracapsular";

pub const LINFONODO_ATIPICO: &str = "atipico";
