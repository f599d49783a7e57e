//! Configuración y argumentos CLI

use crate::analyzer::DEFAULT_MAX_TEXT_LEN;

#[derive(Debug, Clone)]
pub struct Config {
    /// Texto a analizar (argumento posicional)
    pub text: Option<String>,
    /// Archivo de entrada
    pub input_file: Option<String>,
    /// Archivo de salida
    pub output_file: Option<String>,
    /// Emitir JSON compacto en lugar de legible
    pub compact: bool,
    /// Longitud máxima de entrada en caracteres
    pub max_text_len: usize,
    /// Mostrar ayuda
    pub show_help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: None,
            input_file: None,
            output_file: None,
            compact: false,
            max_text_len: DEFAULT_MAX_TEXT_LEN,
            show_help: false,
        }
    }
}

impl Config {
    pub fn from_args(args: Vec<String>) -> Result<Self, String> {
        let mut config = Config::default();
        let mut args_iter = args.into_iter().skip(1); // Skip program name

        while let Some(arg) = args_iter.next() {
            match arg.as_str() {
                "-h" | "--help" => {
                    config.show_help = true;
                    return Ok(config);
                }
                "-i" | "--input" => {
                    config.input_file = Some(args_iter.next().ok_or("--input requiere un valor")?);
                }
                "-o" | "--output" => {
                    config.output_file =
                        Some(args_iter.next().ok_or("--output requiere un valor")?);
                }
                "-c" | "--compact" => {
                    config.compact = true;
                }
                "--max-len" => {
                    let value = args_iter.next().ok_or("--max-len requiere un valor")?;
                    config.max_text_len = value
                        .parse()
                        .map_err(|_| format!("--max-len inválido: {}", value))?;
                }
                _ => {
                    if arg.starts_with('-') {
                        return Err(format!("Opción desconocida: {}", arg));
                    }
                    // Argumento posicional = texto a analizar
                    config.text = Some(arg);
                }
            }
        }

        Ok(config)
    }

    pub fn print_help() {
        println!(
            r#"Analizador - Análisis de calidad y puntuación de texto

USO:
    analizador [OPCIONES] [TEXTO]

ARGUMENTOS:
    [TEXTO]    Texto a analizar

OPCIONES:
    -h, --help              Muestra esta ayuda
    -i, --input <ARCHIVO>   Archivo de entrada
    -o, --output <ARCHIVO>  Archivo de salida (JSON)
    -c, --compact           JSON compacto en una línea
    --max-len <N>           Longitud máxima en caracteres (default: 10000)

EJEMPLOS:
    analizador "He are happy about teh results"
    analizador --input borrador.txt --output informe.json
    analizador -c "your welcome""#
        );
    }
}
