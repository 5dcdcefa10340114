//! Extraction prompt template

/// Field names of the structured record, in template order.
pub const RECORD_FIELDS: [&str; 18] = [
    "nombre",
    "apellido_paterno",
    "apellido_materno",
    "fecha",
    "calle_y_numero",
    "colonia",
    "ciudad_municipio",
    "estado",
    "codigo_postal",
    "pais_nacimiento",
    "nacionalidad",
    "fecha_nacimiento",
    "rfc",
    "correo_electronico",
    "telefono",
    "ocupacion",
    "origen_recursos",
    "ha_desempenado_cargo_en_gobierno",
];

/// Build the extraction instruction for one OCR'd document.
///
/// The OCR text is embedded verbatim. The model is asked to answer with a
/// flat JSON object carrying the eighteen expected keys; the two date
/// fields use `DD/MM/YYYY` and the government-role flag is the literal
/// "Sí" or "No".
pub fn build_prompt(text: &str) -> String {
    format!(
        r#"Este es un texto obtenido de un documento con datos personales.
Extrae la información y responde SOLO con un JSON plano, sin explicaciones.
Formato esperado:
{{
  "nombre": "",
  "apellido_paterno": "",
  "apellido_materno": "",
  "fecha": "DD/MM/YYYY",
  "calle_y_numero": "",
  "colonia": "",
  "ciudad_municipio": "",
  "estado": "",
  "codigo_postal": "",
  "pais_nacimiento": "",
  "nacionalidad": "",
  "fecha_nacimiento": "DD/MM/YYYY",
  "rfc": "",
  "correo_electronico": "",
  "telefono": "",
  "ocupacion": "",
  "origen_recursos": "",
  "ha_desempenado_cargo_en_gobierno": "Sí" o "No"
}}

Texto a analizar:
{text}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_ocr_text_verbatim() {
        let text = "CURP: GOMC900514HDFRRL09\nNombre: CARLOS";
        let prompt = build_prompt(text);
        assert!(prompt.contains(text));
    }

    #[test]
    fn prompt_names_every_record_field() {
        let prompt = build_prompt("");
        for field in RECORD_FIELDS {
            let quoted = format!("\"{field}\"");
            assert!(prompt.contains(&quoted), "missing field {field}");
        }
    }

    #[test]
    fn prompt_pins_date_format_and_flag_literals() {
        let prompt = build_prompt("irrelevante");
        assert!(prompt.contains("DD/MM/YYYY"));
        assert!(prompt.contains("\"Sí\" o \"No\""));
    }
}
