//! Python bindings for Picnic.
//!
//! This module provides the `picnic._picnic` extension module: Python-friendly
//! wrappers around the key types plus the NIST signed-message helpers.
//! Messages, signatures and keys are accepted as any bytes-like object.
//! Signing and verification release the GIL.
//!
//! The wheel is built with maturin from `pyproject.toml`, which enables the
//! `extension-module` feature.
//!
//! ```python
//! sk, pk = picnic.keygen(picnic.Picnic_L1_full)
//! sig = picnic.sign(sk, b"a message")
//! assert picnic.verify(pk, b"a message", sig)
//! ```

use pyo3::basic::CompareOp;
use pyo3::buffer::PyBuffer;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};

use crate::{Error, Parameters};

impl From<Error> for PyErr {
    fn from(err: Error) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn to_parameters(param: i32) -> PyResult<Parameters> {
    Ok(Parameters::from_raw(param)?)
}

/// A Picnic private key.
#[pyclass(name = "PrivateKey", module = "picnic._picnic")]
#[derive(Clone)]
pub struct PyPrivateKey {
    inner: crate::PrivateKey,
}

#[pymethods]
impl PyPrivateKey {
    #[new]
    fn new(py: Python<'_>, data: PyBuffer<u8>) -> PyResult<Self> {
        Ok(Self {
            inner: crate::PrivateKey::from_bytes(&data.to_vec(py)?)?,
        })
    }

    /// The parameter set id of this key.
    #[getter]
    fn param(&self) -> i32 {
        self.inner.parameters().to_raw()
    }

    /// The public key belonging to this private key.
    #[getter]
    fn pk(&self) -> PyResult<PyPublicKey> {
        Ok(PyPublicKey {
            inner: self.inner.public_key()?,
        })
    }

    fn __bytes__<'py>(&self, py: Python<'py>) -> PyResult<&'py PyBytes> {
        Ok(PyBytes::new(py, &self.inner.to_bytes()?))
    }

    fn __richcmp__(&self, other: PyRef<'_, Self>, op: CompareOp, py: Python<'_>) -> PyObject {
        match op {
            CompareOp::Eq => (self.inner == other.inner).into_py(py),
            CompareOp::Ne => (self.inner != other.inner).into_py(py),
            _ => py.NotImplemented(),
        }
    }

    fn __repr__(&self) -> String {
        format!("PrivateKey({})", self.inner.parameters())
    }
}

/// A Picnic public key.
#[pyclass(name = "PublicKey", module = "picnic._picnic")]
#[derive(Clone)]
pub struct PyPublicKey {
    inner: crate::PublicKey,
}

#[pymethods]
impl PyPublicKey {
    #[new]
    fn new(py: Python<'_>, data: PyBuffer<u8>) -> PyResult<Self> {
        Ok(Self {
            inner: crate::PublicKey::from_bytes(&data.to_vec(py)?)?,
        })
    }

    /// The parameter set id of this key.
    #[getter]
    fn param(&self) -> i32 {
        self.inner.parameters().to_raw()
    }

    fn __bytes__<'py>(&self, py: Python<'py>) -> PyResult<&'py PyBytes> {
        Ok(PyBytes::new(py, &self.inner.to_bytes()?))
    }

    fn __richcmp__(&self, other: PyRef<'_, Self>, op: CompareOp, py: Python<'_>) -> PyObject {
        match op {
            CompareOp::Eq => (self.inner == other.inner).into_py(py),
            CompareOp::Ne => (self.inner != other.inner).into_py(py),
            _ => py.NotImplemented(),
        }
    }

    fn __repr__(&self) -> PyResult<String> {
        let key = self.inner.to_bytes()?;
        Ok(format!("PublicKey({}, {})", self.inner.parameters(), hex::encode(key)))
    }
}

/// Generate a key pair for the given parameter set; returns `(sk, pk)`.
#[pyfunction]
fn keygen(param: i32) -> PyResult<(PyPrivateKey, PyPublicKey)> {
    let (sk, pk) = crate::keygen(to_parameters(param)?)?;
    Ok((PyPrivateKey { inner: sk }, PyPublicKey { inner: pk }))
}

/// Sign a message.
#[pyfunction]
fn sign<'py>(py: Python<'py>, sk: PyRef<'_, PyPrivateKey>, msg: PyBuffer<u8>) -> PyResult<&'py PyBytes> {
    let msg = msg.to_vec(py)?;
    let sk = &sk.inner;
    let signature = py.allow_threads(|| sk.sign(&msg))?;
    Ok(PyBytes::new(py, signature.as_bytes()))
}

/// Verify a signature.
#[pyfunction]
fn verify(py: Python<'_>, pk: PyRef<'_, PyPublicKey>, msg: PyBuffer<u8>, sig: PyBuffer<u8>) -> PyResult<bool> {
    let msg = msg.to_vec(py)?;
    let sig = sig.to_vec(py)?;
    let pk = &pk.inner;
    Ok(py.allow_threads(|| crate::verify(pk, &msg, &sig))?)
}

/// Check that a private key and a public key form a key pair.
#[pyfunction]
fn validate_keypair(sk: PyRef<'_, PyPrivateKey>, pk: PyRef<'_, PyPublicKey>) -> bool {
    crate::validate_keypair(&sk.inner, &pk.inner)
}

/// Pack message and signature with the encoding of the NIST PQC competition.
#[pyfunction]
fn pack_nist_signature<'py>(py: Python<'py>, msg: PyBuffer<u8>, sig: PyBuffer<u8>) -> PyResult<&'py PyBytes> {
    let packed = crate::pack_signature(&msg.to_vec(py)?, &sig.to_vec(py)?);
    Ok(PyBytes::new(py, &packed))
}

/// Unpack message and signature from the encoding of the NIST PQC competition.
#[pyfunction]
fn unpack_nist_signature<'py>(py: Python<'py>, sig: PyBuffer<u8>) -> PyResult<(&'py PyBytes, &'py PyBytes)> {
    let data = sig.to_vec(py)?;
    let (msg, sig) = crate::unpack_signature(&data)?;
    Ok((PyBytes::new(py, msg), PyBytes::new(py, sig)))
}

/// Sign a message and encode the signature for the NIST PQC competition.
#[pyfunction]
fn sign_nist<'py>(py: Python<'py>, sk: PyRef<'_, PyPrivateKey>, msg: PyBuffer<u8>) -> PyResult<&'py PyBytes> {
    let msg = msg.to_vec(py)?;
    let sk = &sk.inner;
    let signed = py.allow_threads(|| crate::sign_nist(sk, &msg))?;
    Ok(PyBytes::new(py, &signed))
}

/// Verify a NIST PQC encoded signature and return the signed message, or `None`.
#[pyfunction]
fn verify_nist<'py>(py: Python<'py>, pk: PyRef<'_, PyPublicKey>, sig: PyBuffer<u8>) -> PyResult<Option<&'py PyBytes>> {
    let data = sig.to_vec(py)?;
    let pk = &pk.inner;
    let msg = py.allow_threads(|| crate::verify_nist(pk, &data))?;
    Ok(msg.map(|m| PyBytes::new(py, m)))
}

#[pymodule]
fn _picnic(py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_class::<PyPrivateKey>()?;
    m.add_class::<PyPublicKey>()?;

    m.add_function(wrap_pyfunction!(keygen, m)?)?;
    m.add_function(wrap_pyfunction!(sign, m)?)?;
    m.add_function(wrap_pyfunction!(verify, m)?)?;
    m.add_function(wrap_pyfunction!(validate_keypair, m)?)?;
    m.add_function(wrap_pyfunction!(pack_nist_signature, m)?)?;
    m.add_function(wrap_pyfunction!(unpack_nist_signature, m)?)?;
    m.add_function(wrap_pyfunction!(sign_nist, m)?)?;
    m.add_function(wrap_pyfunction!(verify_nist, m)?)?;

    let names = PyDict::new(py);
    for params in Parameters::ALL {
        m.add(params.name(), params.to_raw())?;
        names.set_item(params.to_raw(), params.name())?;
    }

    let all: Vec<i32> = Parameters::ALL.iter().map(|p| p.to_raw()).collect();
    let supported: Vec<i32> = Parameters::supported().map(Parameters::to_raw).collect();
    m.add("ALL_PARAMETERS", all)?;
    m.add("SUPPORTED_PARAMETERS", supported)?;
    m.add("PARAMETER_NAMES", names)?;

    Ok(())
}
