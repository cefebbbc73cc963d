//! Standalone Leaflet page. `__NAME__` tokens are filled in by the renderer.

pub const MAP_PAGE_HTML: &str = r#"<!doctype html>
<html lang="fr">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>__TITLE__</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" crossorigin="" />
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" crossorigin=""></script>
  <style>
    html, body { height: 100%; margin: 0; padding: 0; }
    #map { position: absolute; top: 0; bottom: 0; left: 0; right: 0; }
    #filter-container {
      position: fixed; top: 10px; left: 50px; z-index: 9999; min-width: 260px;
      background: white; padding: 10px; border-radius: 5px; box-shadow: 0 2px 6px rgba(0,0,0,0.3);
      font-family: sans-serif;
    }
    #filter-container select, #filter-container button { width: 100%; margin-bottom: 10px; }
    #no-results { color: red; font-weight: bold; display: none; margin-top: 10px; }
    .legend { background: white; padding: 8px 10px; border-radius: 5px; font-family: sans-serif; }
    .legend h4 { margin: 0 0 6px 0; }
    .legend .row { display: flex; align-items: center; margin-bottom: 5px; }
    .legend .swatch { width: 20px; height: 20px; margin-right: 5px; }
  </style>
</head>
<body>
  <div id="map"></div>
  <div id="filter-container">
    <label for="pieces-select"><b>Pièces :</b></label><br>
    <select id="pieces-select"></select>
    <label for="type-select"><b>Type :</b></label><br>
    <select id="type-select"></select>
    <button id="reset-btn">Réinitialiser</button>
    <p id="no-results">Aucun logement trouvé.</p>
  </div>
  <script>
  (function () {
    const ALL = "all";
    const data = __DATA__;
    const options = __OPTIONS__;
    const range = __RANGE__;
    const legendRows = __LEGEND__;

    const map = L.map("map").setView([__CENTER_LAT__, __CENTER_LON__], __ZOOM__);
    L.tileLayer("https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png", {
      maxZoom: 19,
      attribution: "&copy; OpenStreetMap contributors"
    }).addTo(map);
    const layer = L.layerGroup().addTo(map);

    const selPieces = document.getElementById("pieces-select");
    const selType = document.getElementById("type-select");
    const noResults = document.getElementById("no-results");
    const resetBtn = document.getElementById("reset-btn");

    options.pieces.forEach(p => selPieces.add(new Option(p, p)));
    options.type_location.forEach(t => selType.add(new Option(t, t)));

    const escapeHtml = s => String(s).replace(/[&<>"']/g, c => ({
      "&": "&amp;", "<": "&lt;", ">": "&gt;", '"': "&quot;", "'": "&#39;"
    }[c]));

    // Mirrors RentRange::color. Only called when range is non-null
    const color = loyer => {
      const span = range.max - range.min;
      const ratio = span > 0 ? Math.min(Math.max((loyer - range.min) / span, 0), 1) : 0.5;
      return `rgb(${Math.floor(255 * ratio)}, ${Math.floor(255 * (1 - ratio))}, 0)`;
    };

    const matches = (d, pf, tf) =>
      (pf === ALL || String(d.pieces) === pf) && (tf === ALL || d.type_location === tf);

    const legend = L.control({ position: "topright" });
    legend.onAdd = function () {
      const div = L.DomUtil.create("div", "info legend");
      div.innerHTML = "<h4>Légende des loyers</h4>" + legendRows.map(([swatch, label]) =>
        `<div class="row"><div class="swatch" style="background: ${swatch};"></div><span>${escapeHtml(label)}</span></div>`
      ).join("");
      return div;
    };
    legend.addTo(map);

    function updateMarkers(pf, tf) {
      layer.clearLayers();
      const filtered = data.filter(d => matches(d, pf, tf));
      noResults.style.display = filtered.length ? "none" : "block";
      filtered.forEach(d => {
        const c = color(d.loyer);
        L.circleMarker([d.latitude, d.longitude], {
          radius: 6, color: c, fillColor: c, fillOpacity: 0.8
        }).bindPopup(
          `<b>${escapeHtml(d.quartier)}</b><br>Pièces: ${d.pieces}<br>` +
          `Type: ${escapeHtml(d.type_location)}<br>Loyer: ${d.loyer} €/m²`
        ).addTo(layer);
      });
    }

    selPieces.onchange = () => updateMarkers(selPieces.value, selType.value);
    selType.onchange = () => updateMarkers(selPieces.value, selType.value);
    resetBtn.onclick = () => {
      selPieces.value = selType.value = ALL;
      updateMarkers(ALL, ALL);
    };

    updateMarkers(ALL, ALL);
  })();
  </script>
</body>
</html>
"#;
