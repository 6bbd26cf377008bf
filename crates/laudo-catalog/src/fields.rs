//! Field names shared between the remote store payloads, the fallback
//! tables, the engines, and the composer.

// Common to both systems.
pub const INDICACAO: &str = "indicacao";
pub const LOCALIZACAO: &str = "localizacao";
pub const NOTAS: &str = "notas";

// TI-RADS scoring axes.
pub const COMPOSICAO: &str = "composicao";
pub const ECOGENICIDADE: &str = "ecogenicidade";
pub const FORMATO: &str = "formato";
pub const MARGENS: &str = "margens";
pub const FOCOS: &str = "focos";

// Breast record fields.
pub const PARENQUIMA: &str = "parenquima";
pub const CIRURGIA: &str = "cirurgia";
pub const RECONSTRUCAO: &str = "reconstrucao";
pub const CISTO_TIPO: &str = "cisto_tipo";
pub const NODULO_FORMATO: &str = "nodulo_formato";
pub const NODULO_MARGENS: &str = "nodulo_margens";
pub const NODULO_ECOGENICIDADE: &str = "nodulo_ecogenicidade";
pub const NODULO_ACUSTICA: &str = "nodulo_acustica";
pub const ECTASIA_CONTEUDO: &str = "ectasia_conteudo";
pub const DISTORCAO_RELACAO: &str = "distorcao_relacao";
pub const DISTORCAO_ASPECTO: &str = "distorcao_aspecto";
pub const IMPLANTE_INTEGRIDADE: &str = "implante_integridade";
pub const LINFONODO_PADRAO: &str = "linfonodo_padrao";
